use super::*;

fn address(province: &str) -> RawGeoAddress {
    RawGeoAddress {
        region: Some(province.to_string()),
        ..RawGeoAddress::default()
    }
}

#[test]
fn postal_code_beats_conflicting_suburb_alias() {
    let addr = RawGeoAddress {
        postal_code: Some("7570".to_string()),
        subregion: Some("Claremont".to_string()),
        ..address("Western Cape")
    };
    let (location, source) = resolve_with_source(&addr);
    assert_eq!(
        location,
        ResolvedLocation::new("Western Cape", "Northern Suburbs")
    );
    assert_eq!(source, ResolutionSource::PostalCode);
}

#[test]
fn postal_code_from_another_province_is_ignored() {
    let addr = RawGeoAddress {
        postal_code: Some("7570".to_string()),
        city: Some("Sandton".to_string()),
        ..address("Gauteng")
    };
    let (location, source) = resolve_with_source(&addr);
    assert_eq!(location.region, "Sandton/Rivonia");
    assert_eq!(source, ResolutionSource::SuburbAlias);
}

#[test]
fn unmapped_postal_code_falls_through_to_alias() {
    let addr = RawGeoAddress {
        postal_code: Some("9999".to_string()),
        district: Some("Durbanville".to_string()),
        ..address("Western Cape")
    };
    let (location, source) = resolve_with_source(&addr);
    assert_eq!(location.region, "Northern Suburbs");
    assert_eq!(source, ResolutionSource::SuburbAlias);
}

#[test]
fn alias_on_any_candidate_beats_substring_on_an_earlier_one() {
    let addr = RawGeoAddress {
        subregion: Some("Northern Suburbs District".to_string()),
        city: Some("Claremont".to_string()),
        ..address("Western Cape")
    };
    let (location, source) = resolve_with_source(&addr);
    assert_eq!(location.region, "Southern Suburbs");
    assert_eq!(source, ResolutionSource::SuburbAlias);
}

#[test]
fn earlier_candidate_wins_within_alias_step() {
    let addr = RawGeoAddress {
        subregion: Some("Claremont".to_string()),
        city: Some("Bellville".to_string()),
        ..address("Western Cape")
    };
    assert_eq!(resolve(&addr).region, "Southern Suburbs");
}

#[test]
fn alias_from_another_province_does_not_leak() {
    let addr = RawGeoAddress {
        subregion: Some("Stellenbosch".to_string()),
        ..address("Gauteng")
    };
    let (location, source) = resolve_with_source(&addr);
    assert_eq!(location, ResolvedLocation::new("Gauteng", "Stellenbosch"));
    assert_eq!(source, ResolutionSource::Fallback);
}

#[test]
fn unknown_province_skips_alias_table() {
    let addr = RawGeoAddress {
        subregion: Some("stellenbosch".to_string()),
        ..address("Ontario")
    };
    let (location, source) = resolve_with_source(&addr);
    assert_eq!(location, ResolvedLocation::new("Ontario", "stellenbosch"));
    assert_eq!(source, ResolutionSource::UnknownProvince);
}

#[test]
fn substring_checks_each_slash_separated_part() {
    let addr = RawGeoAddress {
        city: Some("Wellington Central".to_string()),
        ..address("Western Cape")
    };
    let (location, source) = resolve_with_source(&addr);
    assert_eq!(location.region, "Paarl/Wellington");
    assert_eq!(source, ResolutionSource::Substring);
}

#[test]
fn loose_province_match_returns_canonical_name() {
    let addr = RawGeoAddress {
        district: Some("Umhlanga Rocks".to_string()),
        ..address("KwaZulu-Natal")
    };
    let location = resolve(&addr);
    assert_eq!(
        location,
        ResolvedLocation::new("Kwa Zulu Natal", "Umhlanga/Ballito")
    );
}

#[test]
fn fallback_uses_first_non_empty_candidate() {
    let addr = RawGeoAddress {
        street: Some(String::new()),
        place_name: Some("Some Farm".to_string()),
        city: Some("Nowhere".to_string()),
        ..address("Gauteng")
    };
    let (location, source) = resolve_with_source(&addr);
    assert_eq!(location.region, "Some Farm");
    assert_eq!(source, ResolutionSource::Fallback);
}

#[test]
fn fallback_uses_province_when_no_candidates() {
    let (location, source) = resolve_with_source(&address("gauteng"));
    assert_eq!(location, ResolvedLocation::new("Gauteng", "Gauteng"));
    assert_eq!(source, ResolutionSource::Fallback);
}

#[test]
fn empty_address_is_unresolved() {
    let location = resolve(&RawGeoAddress::default());
    assert_eq!(location, ResolvedLocation::default());
    assert!(location.is_unresolved());
}

#[test]
fn typed_input_runs_through_the_same_chain() {
    let location = resolve(&RawGeoAddress::typed("Western Cape", "claremont "));
    assert_eq!(
        location,
        ResolvedLocation::new("Western Cape", "Southern Suburbs")
    );
    assert!(!location.is_unresolved());
}

#[test]
fn resolution_is_deterministic() {
    let addr = RawGeoAddress {
        postal_code: Some("2196".to_string()),
        subregion: Some("Bryanston".to_string()),
        street: Some("Rivonia Road".to_string()),
        ..address("Gauteng")
    };
    let first = resolve_with_source(&addr);
    for _ in 0..10 {
        assert_eq!(resolve_with_source(&addr), first);
    }
}

#[test]
fn deserializes_provider_field_names() {
    let json = r#"{"region": "Western Cape", "postalCode": "7441", "placeName": "Table View"}"#;
    let addr: RawGeoAddress = serde_json::from_str(json).expect("valid address json");
    assert_eq!(addr.postal_code.as_deref(), Some("7441"));
    assert_eq!(resolve(&addr).region, "Western Seaboard");
}

#[test]
fn pretoria_north_alias_accepts_both_spellings() {
    for suburb in ["Akamasia", "Akasia"] {
        let addr = RawGeoAddress {
            subregion: Some(suburb.to_string()),
            ..address("Gauteng")
        };
        let (location, source) = resolve_with_source(&addr);
        assert_eq!(
            location,
            ResolvedLocation::new("Gauteng", "Pretoria North"),
            "{suburb}"
        );
        assert_eq!(source, ResolutionSource::SuburbAlias, "{suburb}");
    }
}
