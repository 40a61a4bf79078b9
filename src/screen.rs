pub mod checklist;

pub use checklist::Checklist;
