// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
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

//! Packed DMS coordinate tokens.
//!
//! AIXM 4.5 writes a coordinate as one token without separators: two degree
//! digits for a latitude (`483218.00N`) or three for a longitude
//! (`0073742.00E`), followed by minutes, seconds with an optional fraction
//! and the hemisphere letter.

/// Which coordinate a token describes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn degree_digits(self) -> usize {
        match self {
            Self::Latitude => 2,
            Self::Longitude => 3,
        }
    }

    fn max_degrees(self) -> u16 {
        match self {
            Self::Latitude => 90,
            Self::Longitude => 180,
        }
    }

    fn hemispheres(self) -> (char, char) {
        match self {
            Self::Latitude => ('N', 'S'),
            Self::Longitude => ('E', 'W'),
        }
    }
}

struct Dms<'a> {
    degrees: u16,
    minutes: u8,
    seconds: f64,
    /// Whole seconds as written.
    whole_seconds: &'a str,
    hemisphere: char,
}

impl Dms<'_> {
    fn negative(&self) -> bool {
        matches!(self.hemisphere, 'S' | 'W')
    }
}

fn split(token: &str, axis: Axis) -> Option<Dms<'_>> {
    let token = token.trim();
    let hemisphere = token.chars().last()?;
    let (positive, negative) = axis.hemispheres();
    if hemisphere != positive && hemisphere != negative {
        return None;
    }

    let body = &token[..token.len() - hemisphere.len_utf8()];
    let width = axis.degree_digits();
    let digits = width + 4;

    if body.len() < digits || !body.as_bytes()[..digits].iter().all(u8::is_ascii_digit) {
        return None;
    }

    let fraction = &body[digits..];
    if !fraction.is_empty() {
        let decimals = fraction.strip_prefix('.')?;
        if decimals.is_empty() || !decimals.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }

    let degrees: u16 = body[..width].parse().ok()?;
    let minutes: u8 = body[width..width + 2].parse().ok()?;
    let seconds: f64 = body[width + 2..].parse().ok()?;

    if minutes >= 60 || seconds >= 60.0 {
        return None;
    }

    let max = axis.max_degrees();
    if degrees > max || (degrees == max && (minutes > 0 || seconds > 0.0)) {
        return None;
    }

    Some(Dms {
        degrees,
        minutes,
        seconds,
        whole_seconds: &body[width + 2..digits],
        hemisphere,
    })
}

/// Decodes a packed DMS token into decimal degrees.
///
/// Returns `None` if the token doesn't match the notation of the `axis`.
/// Southern latitudes and western longitudes are negative. The value is not
/// rounded.
///
/// ```
/// use aerodata::codec::{decode_dms, Axis};
///
/// let lat = decode_dms("483218.00N", Axis::Latitude).unwrap();
/// assert!((lat - 48.538333).abs() < 1e-6);
///
/// assert_eq!(decode_dms("0073742.00E", Axis::Latitude), None);
/// ```
pub fn decode_dms(token: &str, axis: Axis) -> Option<f64> {
    let dms = split(token, axis)?;
    let value = dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0;

    Some(if dms.negative() { -value } else { value })
}

/// Formats a packed DMS token for display as `DD°MM'SS"H` (`DDD°…` for
/// longitudes).
///
/// Fractions of seconds are dropped. A token that can't be read is returned
/// as is.
///
/// ```
/// use aerodata::codec::{format_dms, Axis};
///
/// assert_eq!(format_dms("0073742.50E", Axis::Longitude), "007°37'42\"E");
/// assert_eq!(format_dms("n/a", Axis::Longitude), "n/a");
/// ```
pub fn format_dms(token: &str, axis: Axis) -> String {
    match split(token, axis) {
        Some(dms) => format!(
            "{:0width$}°{:02}'{}\"{}",
            dms.degrees,
            dms.minutes,
            dms.whole_seconds,
            dms.hemisphere,
            width = axis.degree_digits()
        ),
        None => token.to_string(),
    }
}

/// Encodes decimal degrees as a packed DMS token with two decimals of
/// seconds.
pub fn encode_dms(value: f64, axis: Axis) -> String {
    let (positive, negative) = axis.hemispheres();
    let hemisphere = if value < 0.0 { negative } else { positive };

    // work in hundredths of a second so that rounding carries over
    let total = (value.abs() * 360_000.0).round() as u64;
    let degrees = total / 360_000;
    let minutes = total % 360_000 / 6_000;
    let hundredths = total % 6_000;

    format!(
        "{:0width$}{:02}{:02}.{:02}{}",
        degrees,
        minutes,
        hundredths / 100,
        hundredths % 100,
        hemisphere,
        width = axis.degree_digits()
    )
}
