#![allow(dead_code)]

use std::io::{Cursor, Write};
use zip::CompressionMethod;
use zip::write::{FileOptions, ZipWriter};

pub enum Entry<'a> {
    File(&'a str, &'a [u8]),
    Dir(&'a str),
}

pub fn build_zip(entries: &[Entry<'_>]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Stored);

    for entry in entries {
        match entry {
            Entry::File(name, data) => {
                writer.start_file(*name, options).unwrap();
                writer.write_all(data).unwrap();
            }
            Entry::Dir(name) => {
                writer.add_directory(*name, options).unwrap();
            }
        }
    }

    writer.finish().unwrap().into_inner()
}

pub fn files(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let entries: Vec<Entry<'_>> = entries
        .iter()
        .map(|(name, data)| Entry::File(*name, *data))
        .collect();
    build_zip(&entries)
}

pub fn wrap_crx2(pubkey: &[u8], sig: &[u8], zip: &[u8]) -> Vec<u8> {
    let mut data = b"Cr24".to_vec();
    data.extend_from_slice(&2u32.to_le_bytes());
    data.extend_from_slice(&(pubkey.len() as u32).to_le_bytes());
    data.extend_from_slice(&(sig.len() as u32).to_le_bytes());
    data.extend_from_slice(pubkey);
    data.extend_from_slice(sig);
    data.extend_from_slice(zip);
    data
}

pub fn wrap_crx3(header: &[u8], zip: &[u8]) -> Vec<u8> {
    let mut data = b"Cr24".to_vec();
    data.extend_from_slice(&3u32.to_le_bytes());
    data.extend_from_slice(&(header.len() as u32).to_le_bytes());
    data.extend_from_slice(header);
    data.extend_from_slice(zip);
    data
}
