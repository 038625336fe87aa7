// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
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

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const AIXM_DATA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<AIXM-Snapshot version="4.5" origin="SIA">
  <Ahp>
    <AhpUid><codeId>LFST</codeId></AhpUid>
    <txtName>STRASBOURG ENTZHEIM</txtName>
    <geoLat>483218.00N</geoLat>
    <geoLong>0073742.00E</geoLong>
  </Ahp>
  <Vor>
    <VorUid><codeId>STR</codeId><geoLat>483000.00N</geoLat><geoLong>0073400.00E</geoLong></VorUid>
    <valFreq>115.6</valFreq>
  </Vor>
</AIXM-Snapshot>
"#;

fn aerodata() -> Command {
    let mut cmd = Command::cargo_bin("aerodata").expect("binary exists");
    cmd.env_remove("AERODATA_DATA_DIR")
        .env_remove("AERODATA_OUTPUT_DIR")
        .env_remove("AERODATA_SUPPLEMENTS")
        .env_remove("AERODATA_PREFIX")
        .env_remove("AERODATA_RADIUS")
        .env("RUST_LOG", "warn");
    cmd
}

#[test]
fn writes_geojson_and_prints_counts() {
    let temp = TempDir::new().expect("create temp dir");
    fs::write(
        temp.path().join("AIXM4.5_all_FR_OM_2025-01-23.xml"),
        AIXM_DATA,
    )
    .expect("write AIXM");

    aerodata()
        .arg("--data-dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Cycle: 2025-01-23"))
        .stdout(predicate::str::contains("Aerodromes: 1"))
        .stdout(predicate::str::contains("Navaids: 1"));

    let output = temp.path().join("derived").join("geojson");
    for name in [
        "aerodromes",
        "runways",
        "navaids",
        "designated_points",
        "airspaces",
        "obstacles",
    ] {
        assert!(output.join(format!("{name}.geojson")).exists(), "{name}");
    }

    let aerodromes = fs::read_to_string(output.join("aerodromes.geojson")).unwrap();
    assert!(aerodromes.contains("\"FeatureCollection\""));
    assert!(aerodromes.contains("\"airac\":\"2025-01-23\""));
    assert!(aerodromes.contains("LFST"));
}

#[test]
fn output_dir_from_environment() {
    let temp = TempDir::new().expect("create temp dir");
    let output = temp.path().join("out");
    fs::write(temp.path().join("AIXM4.5_2025-01-23.xml"), AIXM_DATA).expect("write AIXM");

    aerodata()
        .env("AERODATA_DATA_DIR", temp.path())
        .env("AERODATA_OUTPUT_DIR", &output)
        .assert()
        .success();

    assert!(output.join("navaids.geojson").exists());
}

#[test]
fn missing_input_fails() {
    let temp = TempDir::new().expect("create temp dir");

    aerodata()
        .arg("--data-dir")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no file matching"));
}

#[test]
fn missing_coordinates_fail() {
    let temp = TempDir::new().expect("create temp dir");
    fs::write(
        temp.path().join("AIXM4.5_2025-01-23.xml"),
        r#"<AIXM-Snapshot><Ahp><AhpUid><codeId>LFGA</codeId></AhpUid></Ahp></AIXM-Snapshot>"#,
    )
    .expect("write AIXM");

    aerodata()
        .arg("--data-dir")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("LFGA"));

    assert!(!temp.path().join("derived").exists());
}
