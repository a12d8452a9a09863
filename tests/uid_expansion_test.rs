// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! uid expansion through a catalog loaded from CSV tables.

#![allow(clippy::unwrap_used)]

mod test_support;

use pretty_assertions::assert_eq;
use test_case::test_case;
use test_support::fixture_catalog;

#[test_case("sn22.1-5", "SN 22.1–5", "Saṃyutta Nikāya 22.1–5" ; "decimal range")]
#[test_case("mn10", "MN 10", "Majjhima Nikāya 10" ; "single number")]
#[test_case("an4.10", "AN 4.10", "Aṅguttara Nikāya 4.10" ; "decimal")]
#[test_case("dhp1-20", "Dhp 1–20", "Dhammapada 1–20" ; "integer range")]
#[test_case("pli-tv-bu-vb-pj1", "Pli TV BU VB PJ 1", "Pāli Theravāda Vinaya BU VB PJ 1" ; "vinaya uid")]
#[test_case("kp1", "KP 1", "Khuddakapāṭha 1" ; "empty acronym falls back")]
#[test_case("", "", "" ; "empty uid")]
fn test_expand_fixture_uids(uid: &str, acronym: &str, name: &str) {
    let catalog = fixture_catalog();
    assert_eq!(catalog.expand_uid_to_acronym(uid), acronym);
    assert_eq!(catalog.expand_uid_to_name(uid), name);
}

#[test]
fn test_duplicate_rows_last_wins() {
    let catalog = fixture_catalog();
    assert_eq!(catalog.expand_uid_to_name("dn1"), "Dīgha Nikāya 1");
    assert_eq!(catalog.expand_uid_to_acronym("dn1"), "DN 1");
}

#[test_case("xyz" ; "single code")]
#[test_case("abc-def" ; "several codes")]
#[test_case("qq9-12" ; "code with range")]
fn test_unknown_components_agree(uid: &str) {
    let catalog = fixture_catalog();
    assert_eq!(
        catalog.expand_uid_to_acronym(uid),
        catalog.expand_uid_to_name(uid)
    );
}

#[test]
fn test_unknown_codes_are_uppercased_and_joined() {
    let catalog = fixture_catalog();
    assert_eq!(catalog.expand_uid_to_acronym("abc-def"), "ABC DEF");
}

#[test]
fn test_expansion_is_deterministic() {
    let catalog = fixture_catalog();
    let first = catalog.expand_uid_to_name("sn56.11");
    for _ in 0..10 {
        assert_eq!(catalog.expand_uid_to_name("sn56.11"), first);
    }
}
