//! On-disk fixtures: price files and per-exchange input trees.

use std::fs;
use std::path::{Path, PathBuf};

/// Write one comma-delimited price file with synthetic identifiers.
pub fn write_price_file(dir: &Path, name: &str, prices: &[f64]) -> PathBuf {
    let path = dir.join(name);
    let body: String = prices
        .iter()
        .enumerate()
        .map(|(i, price)| format!("TEST,2024-01-01 00:00:{i:02},{price}\n"))
        .collect();
    fs::write(&path, body).expect("write price file");
    path
}

/// Create `root/<exchange>` and fill it with one file per `(name, prices)`
/// pair.
pub fn write_exchange(root: &Path, exchange: &str, files: &[(&str, &[f64])]) -> PathBuf {
    let dir = root.join(exchange);
    fs::create_dir_all(&dir).expect("create exchange dir");
    for (name, prices) in files {
        write_price_file(&dir, name, prices);
    }
    dir
}
