use super::{
    BodyCell, BodyEntry, BodyPosition, BodyRow, ExtraInfo, HorizontalAngle, HorizontalPosition,
    Magnitude, SkyView, partition,
};

fn row(name: &str, altitude: &str, azimuth: &str, magnitude: Option<f64>) -> BodyRow {
    let position = HorizontalPosition::new(HorizontalAngle::degrees(altitude), HorizontalAngle::degrees(azimuth));
    BodyRow::new(
        BodyEntry::named(name),
        vec![BodyCell::new(Some(BodyPosition::horizontal(position)), magnitude.map(ExtraInfo::with_magnitude))],
    )
}

fn positionless(name: &str) -> BodyRow { BodyRow::new(BodyEntry::named(name), vec![BodyCell::default()]) }

#[test]
fn test_partition_threshold() {
    let rows = vec![
        row("Mars", "0.0001", "120.5", Some(1.2)),
        row("Venus", "0", "80", None),
        row("Moon", "-12.75", "200", Some(-11.0)),
        positionless("Pluto"),
    ];
    let view = partition(&rows);

    assert_eq!(view.visible().len(), 1);
    let mars = &view.visible()[0];
    assert_eq!(mars.name(), "Mars");
    assert!((mars.altitude() - 0.0001).abs() < 1e-12);
    assert!((mars.azimuth() - 120.5).abs() < 1e-12);
    assert_eq!(mars.magnitude(), &Magnitude::Known(1.2));

    let reasons: Vec<(&str, &str)> = view.filtered_out().iter().map(|f| (f.name(), f.reason())).collect();
    assert_eq!(
        reasons,
        vec![
            ("Venus", "Below horizon (alt: 0)"),
            ("Moon", "Below horizon (alt: -12.75)"),
            ("Pluto", "No horizontal position"),
        ]
    );
}

#[test]
fn test_partition_is_stable_and_total() {
    let rows: Vec<BodyRow> = (0..20)
        .map(|i| {
            let alt = if i % 3 == 0 { -1.0 } else { f64::from(i) };
            if i % 7 == 0 { positionless(&format!("b{i}")) } else { row(&format!("b{i}"), &alt.to_string(), "10", None) }
        })
        .collect();
    let view = partition(&rows);
    assert_eq!(view.len(), rows.len());

    let visible: Vec<&str> = view.visible().iter().map(|r| r.name()).collect();
    let filtered: Vec<&str> = view.filtered_out().iter().map(|f| f.name()).collect();
    let expected_visible: Vec<String> =
        (0..20).filter(|i| i % 7 != 0 && i % 3 != 0).map(|i| format!("b{i}")).collect();
    let expected_filtered: Vec<String> =
        (0..20).filter(|i| i % 7 == 0 || i % 3 == 0).map(|i| format!("b{i}")).collect();
    assert_eq!(visible, expected_visible);
    assert_eq!(filtered, expected_filtered);
}

#[test]
fn test_missing_magnitude_is_unknown() {
    let view = partition(&[row("Jupiter", "42", "180", None)]);
    assert_eq!(view.visible()[0].magnitude(), &Magnitude::Unknown);
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["visible"][0]["magnitude"], "N/A");
}

#[test]
fn test_malformed_rows_from_json() {
    let rows: Vec<BodyRow> = serde_json::from_value(serde_json::json!([
        { "entry": { "name": "Sun" }, "cells": [] },
        { "entry": { "name": "Saturn" } },
        { "cells": [{ "position": { "horizontal": {
            "altitude": { "degrees": "5.5" }, "azimuth": { "degrees": 33 } } } }] },
        { "entry": { "name": "Comet" }, "cells": [{ "position": { "horizontal": {
            "altitude": { "degrees": "n/a" }, "azimuth": { "degrees": "1" } } } }] },
        { "entry": { "name": "Neptune" }, "cells": [{ "position": { "horizontal": {
            "altitude": { "degrees": 12.25 }, "azimuth": { "degrees": "270.0" } } },
            "extraInfo": { "magnitude": 7.8 } }] }
    ]))
    .unwrap();
    let view = partition(&rows);

    assert_eq!(view.len(), 5);
    assert_eq!(view.filtered_out()[0].reason(), "No horizontal position");
    assert_eq!(view.filtered_out()[1].reason(), "No horizontal position");
    assert_eq!(view.filtered_out()[2].name(), "Comet");
    assert_eq!(view.filtered_out()[2].reason(), "Below horizon (alt: n/a)");
    assert_eq!(view.visible()[0].name(), "Unknown");
    let neptune = view.find_visible("Neptune").unwrap();
    assert_eq!(neptune.magnitude(), &Magnitude::Known(7.8));
    assert!((neptune.azimuth() - 270.0).abs() < 1e-12);
}

#[test]
fn test_sky_view_wire_shape() {
    let view: SkyView = serde_json::from_value(serde_json::json!({
        "visible": [{ "name": "Moon", "altitude": 20.0, "azimuth": 90.0, "magnitude": "N/A" }],
        "filteredOut": [{ "name": "Sun", "reason": "Below horizon (alt: -30.1)" }]
    }))
    .unwrap();
    assert_eq!(view.visible()[0].magnitude(), &Magnitude::Unknown);
    assert_eq!(view.filtered_out()[0].name(), "Sun");
    assert!(!view.is_empty());
}

#[test]
fn test_null_levels_are_filtered_not_fatal() {
    let rows: Vec<BodyRow> = serde_json::from_value(serde_json::json!([
        { "entry": { "name": "Mars" }, "cells": [{ "position": { "horizontal": {
            "altitude": { "degrees": "15" }, "azimuth": { "degrees": "30" } } } }] },
        { "entry": { "name": "Comet" }, "cells": null },
        { "entry": null, "cells": [] },
        { "entry": { "name": "Ceres" }, "cells": [null] },
        { "entry": { "name": "Vesta" }, "cells": [{ "position": null }] },
        { "entry": { "name": "Eris" }, "cells": [{ "position": { "horizontal": null } }] },
        { "entry": { "name": "Io" }, "cells": [{ "position": { "horizontal": {
            "altitude": null, "azimuth": { "degrees": "1" } } } }] },
        { "entry": { "name": "Titan" }, "cells": [{ "position": { "horizontal": {
            "altitude": { "degrees": null }, "azimuth": { "degrees": "1" } } } }] },
        { "entry": { "name": 7 }, "cells": "garbage" }
    ]))
    .unwrap();
    let view = partition(&rows);

    assert_eq!(view.len(), 9);
    assert_eq!(view.visible().len(), 1);
    assert_eq!(view.visible()[0].name(), "Mars");

    let reasons: Vec<(&str, &str)> = view.filtered_out().iter().map(|f| (f.name(), f.reason())).collect();
    assert_eq!(
        reasons,
        vec![
            ("Comet", "No horizontal position"),
            ("Unknown", "No horizontal position"),
            ("Ceres", "No horizontal position"),
            ("Vesta", "No horizontal position"),
            ("Eris", "No horizontal position"),
            ("Io", "Below horizon (alt: null)"),
            ("Titan", "Below horizon (alt: null)"),
            ("Unknown", "No horizontal position"),
        ]
    );
}

#[test]
fn test_non_numeric_magnitude_passes_through() {
    let rows: Vec<BodyRow> = serde_json::from_value(serde_json::json!([
        { "entry": { "name": "Nova" }, "cells": [{ "position": { "horizontal": {
            "altitude": { "degrees": "3" }, "azimuth": { "degrees": "3" } } },
            "extraInfo": { "magnitude": "faint" } }] },
        { "entry": { "name": "Sirius" }, "cells": [{ "position": { "horizontal": {
            "altitude": { "degrees": "8" }, "azimuth": { "degrees": "3" } } },
            "extraInfo": { "magnitude": null } }] }
    ]))
    .unwrap();
    let view = partition(&rows);

    assert_eq!(view.visible()[0].magnitude(), &Magnitude::Other(serde_json::json!("faint")));
    assert_eq!(view.visible()[1].magnitude(), &Magnitude::Unknown);
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["visible"][0]["magnitude"], "faint");
    assert_eq!(json["visible"][1]["magnitude"], "N/A");
}
