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

use aerodata::geom::Coordinate;
use aerodata::measurements::constants::EARTH_RADIUS_NM;
use aerodata::nd::{AeronauticalData, AirspaceGeometry, NavaidType, ServiceType};
use aerodata::{Entity, Error};

const AIXM_DATA: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<AIXM-Snapshot xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" version="4.5" origin="SIA" effective="2025-01-23T00:00:00">

  <!-- Aerodrome -->
  <Ahp>
    <AhpUid mid="1"><codeId>LFST</codeId></AhpUid>
    <txtName>STRASBOURG ENTZHEIM</txtName>
    <codeIcao>LFST</codeIcao>
    <codeIata>SXB</codeIata>
    <codeType>AD</codeType>
    <geoLat>483218.00N</geoLat>
    <geoLong>0073742.00E</geoLong>
    <valElev>505</valElev>
    <uomDistVer>FT</uomDistVer>
    <txtNameCitySer>STRASBOURG</txtNameCitySer>
    <valMagVar>2</valMagVar>
    <valMagVarChg>0.2</valMagVarChg>
    <txtDescrRefPt>Centre piste 05/23</txtDescrRefPt>
    <txtNameAdmin>CCI STRASBOURG ET BAS-RHIN</txtNameAdmin>
  </Ahp>

  <!-- Runway with both ends -->
  <Rwy>
    <RwyUid><AhpUid><codeId>LFST</codeId></AhpUid><txtDesig>05/23</txtDesig></RwyUid>
    <valLen>2400</valLen>
    <valWid>45</valWid>
    <uomDimRwy>M</uomDimRwy>
    <codeComposition>ASPH</codeComposition>
  </Rwy>
  <Rdn>
    <RdnUid>
      <RwyUid><AhpUid><codeId>LFST</codeId></AhpUid><txtDesig>05/23</txtDesig></RwyUid>
      <txtDesig>05</txtDesig>
    </RdnUid>
    <geoLat>483130.00N</geoLat>
    <geoLong>0073630.00E</geoLong>
    <valTrueBrg>48.5</valTrueBrg>
    <valMagBrg>50</valMagBrg>
  </Rdn>
  <Rdn>
    <RdnUid>
      <RwyUid><AhpUid><codeId>LFST</codeId></AhpUid><txtDesig>05/23</txtDesig></RwyUid>
      <txtDesig>23</txtDesig>
    </RdnUid>
    <geoLat>483300.00N</geoLat>
    <geoLong>0073900.00E</geoLong>
    <valTrueBrg>228.5</valTrueBrg>
    <valMagBrg>230</valMagBrg>
  </Rdn>
  <Rdd>
    <RddUid>
      <RdnUid>
        <RwyUid><AhpUid><codeId>LFST</codeId></AhpUid><txtDesig>05/23</txtDesig></RwyUid>
        <txtDesig>05</txtDesig>
      </RdnUid>
      <codeType>TORA</codeType>
    </RddUid>
    <valDist>2400</valDist>
    <uomDist>M</uomDist>
  </Rdd>
  <Rdd>
    <RddUid>
      <RdnUid>
        <RwyUid><AhpUid><codeId>LFST</codeId></AhpUid><txtDesig>05/23</txtDesig></RwyUid>
        <txtDesig>05</txtDesig>
      </RdnUid>
      <codeType>TORA</codeType>
    </RddUid>
    <valDist>2200</valDist>
    <uomDist>M</uomDist>
  </Rdd>
  <Rdd>
    <RddUid>
      <RdnUid>
        <RwyUid><AhpUid><codeId>LFST</codeId></AhpUid><txtDesig>05/23</txtDesig></RwyUid>
        <txtDesig>23</txtDesig>
      </RdnUid>
      <codeType>LDA</codeType>
    </RddUid>
    <valDist>2300</valDist>
    <uomDist>M</uomDist>
  </Rdd>
  <Ils>
    <IlsUid>
      <RdnUid>
        <RwyUid><AhpUid><codeId>LFST</codeId></AhpUid><txtDesig>05/23</txtDesig></RwyUid>
        <txtDesig>23</txtDesig>
      </RdnUid>
    </IlsUid>
    <codeCat>I</codeCat>
    <Ilz><codeId>ISXB</codeId><valFreq>109.7</valFreq></Ilz>
  </Ils>

  <!-- Navaids: a co-located VOR and DME plus a distant NDB -->
  <Vor>
    <VorUid><codeId>STR</codeId><geoLat>483000.00N</geoLat><geoLong>0073400.00E</geoLong></VorUid>
    <txtName>STRASBOURG</txtName>
    <valFreq>115.6</valFreq>
    <uomFreq>MHZ</uomFreq>
  </Vor>
  <Dme>
    <DmeUid><codeId>STR</codeId><geoLat>483000.00N</geoLat><geoLong>0073400.00E</geoLong></DmeUid>
    <codeChannel>103X</codeChannel>
  </Dme>
  <Ndb>
    <NdbUid><codeId>LUL</codeId><geoLat>474300.00N</geoLat><geoLong>0063000.00E</geoLong></NdbUid>
    <txtName>LUXEUIL</txtName>
    <valFreq>397</valFreq>
    <uomFreq>KHZ</uomFreq>
  </Ndb>

  <!-- Designated points -->
  <Dpn>
    <DpnUid><codeId>SE</codeId><geoLat>483500N</geoLat><geoLong>0074000E</geoLong></DpnUid>
    <AhpUidAssoc><codeId>LFST</codeId></AhpUidAssoc>
    <codeType>VFR-MRP</codeType>
    <txtName>SIERRA ECHO</txtName>
  </Dpn>
  <Dpn>
    <DpnUid><codeId>NX</codeId><geoLat>470000N</geoLat><geoLong>0050000E</geoLong></DpnUid>
    <AhpUidAssoc><codeId>LFZZ</codeId></AhpUidAssoc>
    <codeType>VFR-RP</codeType>
  </Dpn>

  <!-- Airspaces -->
  <Ase>
    <AseUid><codeType>R</codeType><codeId>LFR45A</codeId></AseUid>
    <txtName>R 45 A</txtName>
    <codeDistVerUpper>STD</codeDistVerUpper>
    <valDistVerUpper>65</valDistVerUpper>
    <uomDistVerUpper>FL</uomDistVerUpper>
    <codeDistVerLower>HEI</codeDistVerLower>
    <valDistVerLower>0</valDistVerLower>
    <uomDistVerLower>FT</uomDistVerLower>
    <Abd>
      <Avx><geoLat>480000N</geoLat><geoLong>0070000E</geoLong></Avx>
      <Avx><geoLat>481000N</geoLat><geoLong>0070000E</geoLong></Avx>
      <Avx><geoLat>481000N</geoLat><geoLong>0071000E</geoLong></Avx>
    </Abd>
  </Ase>
  <Ase>
    <AseUid><codeType>CTR</codeType><codeId>LFST1</codeId></AseUid>
    <txtName>STRASBOURG CTR</txtName>
    <codeClass>D</codeClass>
    <Abd>
      <Avx><geoLat>483000N</geoLat><geoLong>0073000E</geoLong></Avx>
      <Avx><geoLat>484000N</geoLat><geoLong>0073000E</geoLong></Avx>
      <Avx><geoLat>484000N</geoLat><geoLong>0074000E</geoLong></Avx>
    </Abd>
    <Abd>
      <Avx><geoLat>490000N</geoLat><geoLong>0080000E</geoLong></Avx>
      <Avx><geoLat>491000N</geoLat><geoLong>0080000E</geoLong></Avx>
      <Avx><geoLat>491000N</geoLat><geoLong>0081000E</geoLong></Avx>
      <Avx><geoLat>490000N</geoLat><geoLong>0080000E</geoLong></Avx>
    </Abd>
  </Ase>
  <Ase>
    <AseUid><codeType>TMA</codeType><codeId>LFSTTMA</codeId></AseUid>
    <txtName>STRASBOURG TMA</txtName>
    <codeClass>D</codeClass>
  </Ase>

  <!-- Services -->
  <Fqy>
    <FqyUid>
      <SerUid>
        <UniUid><txtName>LFST STRASBOURG</txtName></UniUid>
        <codeType>TWR</codeType>
      </SerUid>
      <valFreqTrans>119.250</valFreqTrans>
    </FqyUid>
    <uomFreq>MHZ</uomFreq>
    <Cdl><txtCallSign>STRASBOURG Tour</txtCallSign></Cdl>
  </Fqy>
  <Ahs>
    <AhsUid><AhpUid><codeId>LFST</codeId></AhpUid><codeType>FUEL</codeType></AhsUid>
    <txtDescrFac>AVGAS 100LL, JET A1</txtDescrFac>
  </Ahs>

  <!-- Obstacle -->
  <Obs>
    <ObsUid><geoLat>483000.00N</geoLat><geoLong>0073000.00E</geoLong></ObsUid>
    <txtName>ANTENNE</txtName>
    <codeLgt>Y</codeLgt>
    <valElev>1200</valElev>
    <valHgt>300</valHgt>
    <uomDistVer>FT</uomDistVer>
  </Obs>
</AIXM-Snapshot>
"#;

const SIA_DATA: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<SiaExport>
  <Situation>
    <AdS>
      <Ad lk="[LF][ST]">
        <AdCode>ST</AdCode>
        <AdNomComplet>STRASBOURG ENTZHEIM</AdNomComplet>
        <AdGestion>CCI Strasbourg</AdGestion>
        <AdTel>03 88 64 67 67</AdTel>
        <AdRem>Contact: ops@strasbourg.aeroport.fr</AdRem>
        <SsliaCat>7</SsliaCat>
        <SsliaAcft>A330</SsliaAcft>
        <NeigePriorite>1 RWY 05/23, 2 TWY A</NeigePriorite>
        <NeigeEqpt>Deneigeuses, saleuse</NeigeEqpt>
        <SvcPaxRem>Assistance PMR sur demande.</SvcPaxRem>
        <Remarque>PPR pour vols d'entrainement.</Remarque>
        <Remarque>Douane sur demande.</Remarque>
      </Ad>
    </AdS>
    <FrequenceS>
      <Frequence lk="[LF][ST][TWR STRASBOURG Tour]">
        <Service lk="[LF][ST][TWR STRASBOURG Tour]"/>
        <Frequence>119.25</Frequence>
        <HorCode>H24</HorCode>
      </Frequence>
      <Frequence lk="[LF][ST][TWR STRASBOURG Sol]">
        <Service lk="[LF][ST][TWR STRASBOURG Sol]"/>
        <Frequence>121.800</Frequence>
      </Frequence>
      <Frequence lk="[LF][ZZ][TWR NOWHERE Tour]">
        <Service lk="[LF][ZZ][TWR NOWHERE Tour]"/>
        <Frequence>118.000</Frequence>
      </Frequence>
    </FrequenceS>
  </Situation>
</SiaExport>
"#;

fn haversine_nm(a: &Coordinate, b: &Coordinate) -> f64 {
    let (lat1, lat2) = (a.latitude.to_radians(), b.latitude.to_radians());
    let dlat = lat2 - lat1;
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_NM * h.sqrt().asin()
}

#[test]
fn merge_aixm_and_sia() {
    let data = AeronauticalData::try_from_sources(AIXM_DATA, Some(SIA_DATA))
        .expect("should merge both sources");

    assert_eq!(data.aerodromes().len(), 1);

    let lfst = data.aerodrome("lfst").expect("LFST should be found");
    assert_eq!(lfst.name.as_deref(), Some("STRASBOURG ENTZHEIM"));
    assert_eq!(lfst.iata.as_deref(), Some("SXB"));
    assert_eq!(lfst.elevation, Some(505.0));
    assert!((lfst.position.coordinate.latitude - 48.538333).abs() < 1e-5);
    assert!((lfst.position.coordinate.longitude - 7.628333).abs() < 1e-5);

    let admin = lfst.admin.as_ref().expect("SIA admin info");
    assert_eq!(admin.operator.as_deref(), Some("CCI Strasbourg"));
    assert_eq!(admin.email.as_deref(), Some("ops@strasbourg.aeroport.fr"));

    assert_eq!(admin.fire_category.as_deref(), Some("7"));
    assert_eq!(admin.fire_aircraft.as_deref(), Some("A330"));
    assert_eq!(admin.snow_priority.as_deref(), Some("1 RWY 05/23, 2 TWY A"));
    assert_eq!(admin.snow_equipment.as_deref(), Some("Deneigeuses, saleuse"));
    assert_eq!(admin.passenger_remarks.as_deref(), Some("Assistance PMR sur demande."));
    assert_eq!(
        admin.additional_remarks,
        ["PPR pour vols d'entrainement.", "Douane sur demande."]
    );

    assert_eq!(lfst.mag_var_change, Some(0.2));
    assert_eq!(lfst.reference_point.as_deref(), Some("Centre piste 05/23"));
    assert_eq!(lfst.administration.as_deref(), Some("CCI STRASBOURG ET BAS-RHIN"));

    assert!(lfst.services.fuel);
    assert!(lfst.services.avgas_100ll);
    assert!(lfst.services.jet_a1);
}

#[test]
fn latin1_sia_export_is_decoded() {
    let sia: &[u8] = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>
<SiaExport>
  <Situation>
    <AdS>
      <Ad lk=\"[LF][ST]\">
        <AdGestion>A\xE9roport de Strasbourg</AdGestion>
        <AdRem>Acc\xE8s r\xE9serv\xE9, contact ops@strasbourg.aeroport.fr</AdRem>
      </Ad>
    </AdS>
  </Situation>
</SiaExport>
";

    let data = AeronauticalData::try_from_sources(AIXM_DATA, Some(sia))
        .expect("a Latin-1 export should be read");

    let admin = data.aerodrome("LFST").unwrap().admin.as_ref().unwrap();
    assert_eq!(admin.operator.as_deref(), Some("Aéroport de Strasbourg"));
    assert_eq!(
        admin.special_instructions.as_deref(),
        Some("Accès réservé, contact ops@strasbourg.aeroport.fr")
    );
    assert_eq!(admin.email.as_deref(), Some("ops@strasbourg.aeroport.fr"));
}

#[test]
fn runway_is_split_into_its_ends() {
    let data = AeronauticalData::try_from_sources(AIXM_DATA, None).unwrap();
    let lfst = data.aerodrome("LFST").unwrap();

    assert_eq!(lfst.runways.len(), 1);
    let rwy = lfst.runway("05/23").expect("runway 05/23");
    assert_eq!(rwy.length, Some(2400.0));
    assert_eq!(rwy.surface.as_deref(), Some("ASPH"));

    let designators: Vec<_> = rwy.directions.iter().map(|d| d.designator.as_str()).collect();
    assert_eq!(designators, ["05", "23"]);

    let rwy05 = rwy.direction("05").unwrap();
    assert_eq!(rwy05.true_bearing, Some(48.5));
    assert_eq!(rwy05.declared_distances.tora, Some(2200.0));
    assert_eq!(rwy05.declared_distances.lda, None);
    assert!(rwy05.ils.is_none());

    let rwy23 = rwy.direction("23").unwrap();
    assert_eq!(rwy23.true_bearing, Some(228.5));
    assert_eq!(rwy23.declared_distances.tora, None);
    assert_eq!(rwy23.declared_distances.lda, Some(2300.0));
    assert_eq!(
        rwy23.ils.as_ref().and_then(|ils| ils.localizer_ident.as_deref()),
        Some("ISXB")
    );
}

#[test]
fn aerodrome_without_latitude_is_rejected() {
    let aixm = br#"<AIXM-Snapshot>
      <Ahp>
        <AhpUid><codeId>LFGA</codeId></AhpUid>
        <txtName>COLMAR HOUSSEN</txtName>
        <geoLong>0072132.00E</geoLong>
      </Ahp>
    </AIXM-Snapshot>"#;

    let err = AeronauticalData::try_from_sources(aixm, None).unwrap_err();
    assert_eq!(
        err,
        Error::MissingRequired {
            entity: Entity::Aerodrome,
            ident: "LFGA".to_string(),
            field: "latitude",
        }
    );
}

#[test]
fn repeated_remarks_dont_hide_a_missing_latitude() {
    let aixm = br#"<AIXM-Snapshot>
      <Ahp>
        <AhpUid><codeId>LFGA</codeId></AhpUid>
        <txtName>COLMAR HOUSSEN</txtName>
        <geoLong>0072132.00E</geoLong>
        <txtRmk>Activite parachutage.</txtRmk>
        <txtRmk>Tours de piste main gauche.</txtRmk>
      </Ahp>
    </AIXM-Snapshot>"#;

    let err = AeronauticalData::try_from_sources(aixm, None).unwrap_err();
    assert_eq!(
        err,
        Error::MissingRequired {
            entity: Entity::Aerodrome,
            ident: "LFGA".to_string(),
            field: "latitude",
        }
    );
}

#[test]
fn unclosed_document_is_rejected() {
    let aixm = br#"<AIXM-Snapshot><Ahp><AhpUid><codeId>LFST</codeId></AhpUid>"#;

    let err = AeronauticalData::try_from_sources(aixm, None).unwrap_err();
    assert!(matches!(err, Error::InvalidXml { source: "AIXM", .. }));
}

#[test]
fn airspaces_need_a_border() {
    let data = AeronauticalData::try_from_sources(AIXM_DATA, None).unwrap();

    let idents: Vec<_> = data.airspaces().iter().map(|a| a.ident.as_str()).collect();
    assert_eq!(idents, ["LFR45A", "LFST1"]);

    let r45a = &data.airspaces()[0];
    let AirspaceGeometry::Polygon(polygon) = &r45a.geometry else {
        panic!("R 45 A should be a polygon");
    };
    // the open ring is closed
    assert_eq!(polygon.exterior().0.len(), 4);
    assert_eq!(r45a.upper.value, Some(6500.0));

    let ctr = &data.airspaces()[1];
    assert!(matches!(ctr.geometry, AirspaceGeometry::MultiPolygon(_)));
    assert_eq!(ctr.geometry.rings(), 2);
}

#[test]
fn navaids_are_combined_and_associated() {
    let data = AeronauticalData::try_from_sources(AIXM_DATA, None).unwrap();

    assert_eq!(data.navaids().len(), 2);
    let station = data.navaids().iter().find(|n| n.ident == "STR").unwrap();
    assert_eq!(station.kind, NavaidType::VorDme);
    assert_eq!(station.frequency, Some(115.6));
    assert_eq!(station.channel.as_deref(), Some("103X"));

    let lfst = data.aerodrome("LFST").unwrap();
    assert_eq!(lfst.navaids.len(), 1, "LUL is outside the radius");

    let assoc = &lfst.navaids[0];
    assert_eq!(assoc.ident, "STR");
    let expected = haversine_nm(&lfst.position.coordinate, &station.position.coordinate);
    assert!((assoc.distance - expected).abs() <= 0.1);
    assert!(assoc.bearing >= 0.0 && assoc.bearing < 360.0);
    // STR lies south-west of the aerodrome
    assert!(assoc.bearing > 180.0 && assoc.bearing < 270.0);
}

#[test]
fn designated_points_follow_their_aerodrome() {
    let data = AeronauticalData::try_from_sources(AIXM_DATA, None).unwrap();

    let lfst = data.aerodrome("LFST").unwrap();
    assert_eq!(lfst.designated_points.len(), 1);
    assert_eq!(lfst.designated_points[0].ident, "SE");
    assert!(lfst.designated_points[0].mandatory);

    let nx = data
        .designated_points()
        .iter()
        .find(|p| p.ident == "NX")
        .expect("NX is kept without aerodrome");
    assert_eq!(nx.aerodrome, None);
}

#[test]
fn frequencies_of_both_sources_are_merged() {
    let data = AeronauticalData::try_from_sources(AIXM_DATA, Some(SIA_DATA)).unwrap();
    let lfst = data.aerodrome("LFST").unwrap();

    let twr = lfst.frequencies(ServiceType::Twr);
    assert_eq!(twr.len(), 1, "119.25 and 119.250 are the same channel");
    assert_eq!(twr[0].value, "119.250");
    assert_eq!(twr[0].call_sign.as_deref(), Some("STRASBOURG Tour"));
    assert_eq!(twr[0].schedule.as_deref(), Some("H24"));

    let gnd = lfst.frequencies(ServiceType::Gnd);
    assert_eq!(gnd.len(), 1);
    assert_eq!(gnd[0].value, "121.800");
    assert_eq!(gnd[0].call_sign.as_deref(), Some("STRASBOURG Sol"));
}

#[test]
fn prefix_limits_aerodromes() {
    let mut builder = AeronauticalData::builder().with_prefix("LFS");
    builder.read_aixm(AIXM_DATA).unwrap();
    assert_eq!(builder.build().unwrap().aerodromes().len(), 1);

    let mut builder = AeronauticalData::builder().with_prefix("LFB");
    builder.read_aixm(AIXM_DATA).unwrap();
    let data = builder.build().unwrap();
    assert!(data.aerodromes().is_empty());
    assert_eq!(data.navaids().len(), 2);
}

#[cfg(feature = "geojson")]
#[test]
fn export_geojson_collections() {
    let cycle = chrono::NaiveDate::from_ymd_opt(2025, 1, 23).unwrap();
    let mut builder = AeronauticalData::builder().with_cycle(cycle);
    builder.read_aixm(AIXM_DATA).unwrap();
    builder.read_sia(SIA_DATA).unwrap();
    let data = builder.build().unwrap();

    let aerodromes = aerodata::geojson::aerodromes(&data);
    assert_eq!(aerodromes.features.len(), 1);
    let members = aerodromes.foreign_members.as_ref().unwrap();
    assert_eq!(members["airac"], "2025-01-23");
    let properties = aerodromes.features[0].properties.as_ref().unwrap();
    assert_eq!(properties["mag_var_change"], 0.2);
    assert_eq!(properties["administration"], "CCI STRASBOURG ET BAS-RHIN");
    assert_eq!(properties["admin"]["fire_aircraft"], "A330");
    assert_eq!(properties["admin"]["snow_priority"], "1 RWY 05/23, 2 TWY A");
    assert_eq!(properties["admin"]["additional_remarks"][1], "Douane sur demande.");

    let runways = aerodata::geojson::runways(&data);
    assert_eq!(runways.features.len(), 1);
    assert!(matches!(
        runways.features[0].geometry.as_ref().map(|g| &g.value),
        Some(geojson::Value::LineString(line)) if line.len() == 2
    ));

    assert_eq!(aerodata::geojson::navaids(&data).features.len(), 2);
    assert_eq!(aerodata::geojson::designated_points(&data).features.len(), 2);
    assert_eq!(aerodata::geojson::obstacles(&data).features.len(), 1);

    let airspaces = aerodata::geojson::airspaces(&data);
    assert_eq!(airspaces.features.len(), 2);
    assert!(airspaces.features.iter().all(|f| f.bbox.is_some()));
}
