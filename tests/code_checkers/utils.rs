// Take a look at the license at the top of the repository in the LICENSE file.

use std::fs::{self, read_dir};
use std::path::Path;

pub fn show_error(p: &Path, err: &str) {
    eprintln!("=> [{}]: {err}", p.display());
}

fn read_dir_rec<F: FnMut(&Path, &str)>(dir: &Path, callback: &mut F) {
    for entry in read_dir(dir).expect("read_dir failed") {
        let path = entry.expect("entry failed").path();
        if path.is_dir() {
            read_dir_rec(&path, callback);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            let content = fs::read_to_string(&path).expect("read_to_string failed");
            callback(&path, &content);
        }
    }
}

pub fn read_dirs<F: FnMut(&Path, &str)>(dirs: &[&str], callback: &mut F) {
    for dir in dirs {
        read_dir_rec(Path::new(dir), callback);
    }
}
