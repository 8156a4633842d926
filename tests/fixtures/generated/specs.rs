// Copyright Elasticsearch B.V. and/or licensed to Elasticsearch B.V. under one
// or more contributor license agreements. Licensed under the Elastic License;
// you may not use this file except in compliance with the Elastic License.

// Code generated by embedpak specs - DO NOT EDIT.

// Packed files:
// - "filebeat.yml" blake3:d9096ab6042c8bd745e84b233c4c8bb390b58e91f7410c04947e675b64351492
// - "metricbeat.yml" blake3:8ae5424e01f18714eb307fc033eaeb470522a5f730d0f5ace47b858c8baaf6be
// - "nested/heartbeat.yml" blake3:ed9e72da5777851c698b286fde2dba32536e68d26876bb3d98b9f1f2e2fb6885
const PACKED: &str = "DAAAAGZpbGViZWF0LnltbCUAAABuYW1lOiBGaWxlYmVhdApjbWQ6IEZvbwphcmdzOiBbIi1lIl0KDgAAAG1ldHJpY2JlYXQueW1sGgAAAG5hbWU6IE1ldHJpY2JlYXQKY21kOiBiYXIKFAAAAG5lc3RlZC9oZWFydGJlYXQueW1sGQAAAG5hbWU6IEhlYXJ0YmVhdApjbWQ6IEJBWgo=";

/// Embedded specs in packed name order, with a lookup keyed by the
/// lower-cased `cmd` field.
pub struct Supported {
    pub specs: ::std::vec::Vec<Spec>,
    pub by_key: ::std::collections::HashMap<::std::string::String, Spec>,
}

impl Supported {
    /// Case-insensitive lookup.
    pub fn get(&self, key: &str) -> ::std::option::Option<&Spec> {
        self.by_key.get(&key.to_lowercase())
    }
}

/// Decodes and parses every embedded spec.
pub fn supported() -> Supported {
    let unpacked = ::embedpak::pak::must_unpack(PACKED);
    let mut specs = ::std::vec::Vec::with_capacity(unpacked.len());
    let mut by_key = ::std::collections::HashMap::with_capacity(unpacked.len());
    for (name, raw) in unpacked {
        let spec = <Spec>::from_bytes(&raw)
            .unwrap_or_else(|err| panic!("cannot read spec from {}: {}", name, err));
        by_key.insert(spec.cmd.to_lowercase(), spec.clone());
        specs.push(spec);
    }
    Supported { specs, by_key }
}
