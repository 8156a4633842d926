// Copyright Elasticsearch B.V. and/or licensed to Elasticsearch B.V. under one
// or more contributor license agreements. Licensed under the Elastic License;
// you may not use this file except in compliance with the Elastic License.

// Code generated by embedpak config - DO NOT EDIT.

// Packed files:
// - "elastic-agent.fleet.yml" blake3:50fb5d2cde566e49b87a73df75b14fd6c2bbe5d2f93d2d8da95f53761262b8d0
const PACKED: &str = "FwAAAGVsYXN0aWMtYWdlbnQuZmxlZXQueW1sNgAAAGZsZWV0OgogIGVuYWJsZWQ6IHRydWUKIyAicXVvdGVkIiBgdGlja3NgIFwgYmFja3NsYXNoCg==";
const ENTRY: &str = "elastic-agent.fleet.yml";

/// Raw bytes of the embedded "elastic-agent.fleet.yml" document.
pub fn default_fleet_config() -> &'static [u8] {
    static RAW: ::std::sync::OnceLock<::std::vec::Vec<u8>> = ::std::sync::OnceLock::new();
    RAW.get_or_init(|| {
        ::embedpak::pak::must_unpack(PACKED)
            .remove(ENTRY)
            .unwrap_or_else(|| panic!("{} is not included in the binary", ENTRY))
    })
}
