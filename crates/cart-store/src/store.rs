//! # Cart File Store
//!
//! Writes a cart's record lines to a flat file and reads them back.
//!
//! ## File Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  cart.txt                                                               │
//! │                                                                         │
//! │  Electronics,Phone,620,12\n                                             │
//! │  Clothing,Shirt,22,M\n                                                  │
//! │  Grocery,Rice,10,5kg\n                                                  │
//! │                                                                         │
//! │  • one record per line, exactly one '\n' after each                     │
//! │  • no header, no total line                                             │
//! │  • save() truncates and overwrites; no append, no atomic rename         │
//! │  • a crash mid-write leaves a partial file                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use cart_core::record::{self, RecordLine};
use cart_core::Cart;
use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};

/// File-backed persistence for one cart session.
#[derive(Debug, Clone)]
pub struct CartStore {
    config: StoreConfig,
}

impl CartStore {
    pub fn new(config: StoreConfig) -> Self {
        CartStore { config }
    }

    pub fn path(&self) -> &Path {
        &self.config.cart_path
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Overwrites the cart file with `cart.persist()`. Returns the number
    /// of records written.
    ///
    /// ## Example
    /// ```rust,no_run
    /// use cart_core::{Cart, Item, Money};
    /// use cart_store::{CartStore, StoreConfig};
    ///
    /// let mut cart = Cart::new();
    /// cart.append(Item::clothing("Shirt", Money::from_major_minor(20, 0), "M"));
    ///
    /// let store = CartStore::new(StoreConfig::new("cart.txt"));
    /// assert_eq!(store.save(&cart).unwrap(), 1);
    /// ```
    pub fn save(&self, cart: &Cart) -> StoreResult<usize> {
        let path = self.path();
        let lines = cart.persist();

        if self.config.create_parent_dirs {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| StoreError::file(parent, e))?;
            }
        }

        if path.exists() {
            warn!(path = %path.display(), "Overwriting existing cart file");
        }

        let file = File::create(path).map_err(|e| StoreError::file(path, e))?;
        let mut writer = BufWriter::new(file);
        write_records(&mut writer, lines.as_slice()).map_err(|e| StoreError::file(path, e))?;
        writer.flush().map_err(|e| StoreError::file(path, e))?;

        let summary = cart.summary();
        info!(
            path = %path.display(),
            records = summary.item_count,
            electronics = summary.electronics,
            clothing = summary.clothing,
            grocery = summary.grocery,
            total = %summary.total,
            "Cart saved"
        );
        Ok(lines.len())
    }

    /// Reads and decodes every record in the cart file.
    pub fn load(&self) -> StoreResult<Vec<RecordLine>> {
        let path = self.path();
        let file = File::open(path).map_err(|e| StoreError::file(path, e))?;
        let records = read_records(BufReader::new(file)).map_err(|e| e.at_path(path))?;

        info!(path = %path.display(), records = records.len(), "Cart file loaded");
        Ok(records)
    }
}

/// Writes each line followed by a single `\n`.
pub fn write_records<W, S>(writer: &mut W, lines: &[S]) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Decodes records from a reader, skipping blank lines.
///
/// Stops at the first line that fails to decode and reports its 1-based
/// line number.
pub fn read_records<R: BufRead>(reader: R) -> StoreResult<Vec<RecordLine>> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let decoded = record::decode(&line).map_err(|source| StoreError::Decode {
            line: index + 1,
            source,
        })?;
        debug!(line = index + 1, kind = %decoded.kind, name = %decoded.name, "Decoded record");
        records.push(decoded);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart_core::{Item, Money, RecordError, Weight};
    use std::io::Cursor;

    fn demo_cart() -> Cart {
        let mut cart = Cart::new();
        cart.append(Item::electronics("Phone", Money::from_cents(50_000), 12));
        cart.append(Item::clothing("Shirt", Money::from_cents(2000), "M"));
        cart.append(Item::grocery("Rice", Money::from_cents(200), Weight::from_kg(5)));
        cart
    }

    #[test]
    fn test_save_writes_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let store = CartStore::new(StoreConfig::new(dir.path().join("cart.txt")));

        let written = store.save(&demo_cart()).unwrap();
        assert_eq!(written, 3);

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            contents,
            "Electronics,Phone,620,12\nClothing,Shirt,22,M\nGrocery,Rice,10,5kg\n"
        );
    }

    #[test]
    fn test_save_overwrites_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.txt");
        fs::write(&path, "stale contents\nmore stale contents\nand more\nand more\n").unwrap();

        let mut cart = Cart::new();
        cart.append(Item::clothing("Hat", Money::from_cents(1000), "L"));
        CartStore::new(StoreConfig::new(&path)).save(&cart).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Clothing,Hat,11,L\n");
    }

    #[test]
    fn test_save_empty_cart_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = CartStore::new(StoreConfig::new(dir.path().join("cart.txt")));

        assert_eq!(store.save(&Cart::new()).unwrap(), 0);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = CartStore::new(StoreConfig::new(dir.path().join("cart.txt")));
        let cart = demo_cart();

        store.save(&cart).unwrap();
        let records = store.load().unwrap();

        let expected: Vec<RecordLine> = cart.iter().map(RecordLine::from).collect();
        assert_eq!(records, expected);

        let total: Money = records.iter().map(|r| r.price).sum();
        assert_eq!(total, cart.total());
    }

    #[test]
    fn test_missing_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("cart.txt");

        let err = CartStore::new(StoreConfig::new(&path))
            .save(&demo_cart())
            .unwrap_err();
        assert!(matches!(err, StoreError::File { .. }));

        let store = CartStore::new(StoreConfig::new(&path).create_parent_dirs(true));
        assert_eq!(store.save(&demo_cart()).unwrap(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = CartStore::new(StoreConfig::new(dir.path().join("absent.txt")));
        assert!(matches!(store.load().unwrap_err(), StoreError::File { .. }));
    }

    #[test]
    fn test_read_records_skips_blank_lines() {
        let input = "Clothing,Shirt,22,M\n\n   \nGrocery,Rice,10,5kg\n";
        let records = read_records(Cursor::new(input)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, "Rice");
    }

    #[test]
    fn test_read_records_reports_line_number() {
        let input = "Clothing,Shirt,22,M\nToys,Ball,5,red\n";
        let err = read_records(Cursor::new(input)).unwrap_err();
        match err {
            StoreError::Decode { line, source } => {
                assert_eq!(line, 2);
                assert_eq!(source, RecordError::UnknownLabel("Toys".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_write_records() {
        let mut buffer = Vec::new();
        write_records(&mut buffer, &["a,b,1,c", "d,e,2,f"]).unwrap();
        assert_eq!(buffer, b"a,b,1,c\nd,e,2,f\n");
    }
}
