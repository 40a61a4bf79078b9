use std::env;
use std::path::{Path, PathBuf};

pub fn main() {
    println!("cargo::rerun-if-changed=data/pokemon.json");

    compress("data/pokemon.json");
}

fn compress(path: impl AsRef<Path>) {
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::fs::File;
    use std::io::{BufReader, BufWriter, copy};

    let path = path.as_ref();
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));

    let file_name = path.file_name().expect("Data file has a name");

    let mut origin = BufReader::new(File::open(path).expect("Read file"));

    let mut encoder = {
        let destination = BufWriter::new(
            File::create(out_dir.join(file_name).with_extension("json.gz")).expect("Create file"),
        );

        GzEncoder::new(destination, Compression::default())
    };

    copy(&mut origin, &mut encoder).expect("Compress file");

    let _ = encoder.finish().expect("Finish encoding");
}
