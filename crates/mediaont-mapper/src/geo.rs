//! GPS coordinates
//!
//! EXIF stores latitude and longitude as three rationals (degrees, minutes,
//! seconds) plus a hemisphere reference, and altitude as one rational plus an
//! above/below-sea-level flag. In extended mode they are turned into signed
//! decimal degrees on a location node; otherwise the raw values are passed
//! through as related literals.

use mediaont_domain::traits::{FieldLookup, GraphSink};
use mediaont_domain::{vocab, Exactness, Literal, Node, Term, Triple};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::dispatcher::Emitter;
use crate::error::MapperError;
use crate::values::parse_decimal;

/// Significant digits kept in converted coordinates
pub const SIGNIFICANT_DIGITS: u32 = 12;

/// Source key of the location node link
pub const LOCATION_KEY: &str = "GPSInfo";

/// One coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// North/south, three rationals
    Latitude,

    /// East/west, three rationals
    Longitude,

    /// Metres relative to sea level, one rational
    Altitude,
}

impl Axis {
    /// All axes, in emission order
    pub const ALL: [Axis; 3] = [Axis::Latitude, Axis::Longitude, Axis::Altitude];

    /// Local name of the `ma:` property for this axis
    pub fn target(&self) -> &'static str {
        match self {
            Axis::Latitude => vocab::ma::LOCATION_LATITUDE,
            Axis::Longitude => vocab::ma::LOCATION_LONGITUDE,
            Axis::Altitude => vocab::ma::LOCATION_ALTITUDE,
        }
    }

    /// Whether `reference` denotes the negative side of this axis
    pub fn is_negative(&self, reference: &str) -> bool {
        let reference = reference.trim();
        match self {
            Axis::Latitude => reference.eq_ignore_ascii_case("S"),
            Axis::Longitude => reference.eq_ignore_ascii_case("W"),
            Axis::Altitude => reference == "1",
        }
    }

    fn components(&self) -> usize {
        match self {
            Axis::Altitude => 1,
            _ => 3,
        }
    }
}

/// Value and reference field keys of one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisFields {
    /// Field holding the rational(s)
    pub value: &'static str,

    /// Field holding the hemisphere or sea-level flag
    pub reference: &'static str,
}

/// The GPS fields of a container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeoFields {
    /// Latitude fields
    pub latitude: AxisFields,

    /// Longitude fields
    pub longitude: AxisFields,

    /// Altitude fields
    pub altitude: AxisFields,
}

impl GeoFields {
    /// Fields of `axis`
    pub fn axis(&self, axis: Axis) -> &AxisFields {
        match axis {
            Axis::Latitude => &self.latitude,
            Axis::Longitude => &self.longitude,
            Axis::Altitude => &self.altitude,
        }
    }
}

/// Parse `n/d` (or a bare number) into a decimal
pub fn parse_rational(text: &str) -> Option<Decimal> {
    let text = text.trim();
    match text.split_once('/') {
        Some((numerator, denominator)) => {
            let numerator = parse_decimal(numerator.trim()).ok()?;
            let denominator = parse_decimal(denominator.trim()).ok()?;
            numerator.checked_div(denominator)
        }
        None => parse_decimal(text).ok(),
    }
}

/// `degrees + minutes/60 + seconds/3600`
pub fn sexagesimal_to_decimal(
    degrees: Decimal,
    minutes: Decimal,
    seconds: Decimal,
) -> Option<Decimal> {
    let minutes = minutes.checked_div(Decimal::from(60))?;
    let seconds = seconds.checked_div(Decimal::from(3600))?;
    degrees.checked_add(minutes)?.checked_add(seconds)
}

/// Signed decimal value of one axis, rounded to [`SIGNIFICANT_DIGITS`]
///
/// `components` are the rational texts of the value field; `None` when they
/// do not have the expected shape.
pub fn resolve_axis(axis: Axis, components: &[String], reference: &str) -> Option<Decimal> {
    let rationals = components
        .iter()
        .flat_map(|c| c.split(|ch: char| ch.is_whitespace() || ch == ','))
        .filter(|part| !part.is_empty())
        .map(parse_rational)
        .collect::<Option<Vec<_>>>()?;
    if rationals.len() != axis.components() {
        return None;
    }

    let magnitude = match axis {
        Axis::Altitude => rationals[0],
        _ => sexagesimal_to_decimal(rationals[0], rationals[1], rationals[2])?,
    };
    let value = if axis.is_negative(reference) {
        -magnitude
    } else {
        magnitude
    };
    Some(value.round_sf(SIGNIFICANT_DIGITS)?.normalize())
}

/// Emit the location of the file from the GPS fields found in `lookup`
///
/// Returns the number of axes emitted.
pub fn add_location<S, L>(
    emitter: &mut Emitter<'_, S>,
    fields: &GeoFields,
    lookup: &L,
) -> Result<usize, MapperError>
where
    S: GraphSink,
    S::Error: std::fmt::Display,
    L: FieldLookup + ?Sized,
{
    if emitter.config().extended {
        add_decimal_location(emitter, fields, lookup)
    } else {
        add_raw_location(emitter, fields, lookup)
    }
}

fn add_decimal_location<S, L>(
    emitter: &mut Emitter<'_, S>,
    fields: &GeoFields,
    lookup: &L,
) -> Result<usize, MapperError>
where
    S: GraphSink,
    S::Error: std::fmt::Display,
    L: FieldLookup + ?Sized,
{
    let mut coordinates = Vec::new();
    for axis in Axis::ALL {
        let keys = fields.axis(axis);
        let Some(reference) = lookup.field(keys.reference) else {
            continue;
        };
        let reference = reference.value.texts().join("");
        let components = lookup
            .field(keys.value)
            .map(|field| field.value.texts())
            .unwrap_or_default();
        match resolve_axis(axis, &components, &reference) {
            Some(value) => coordinates.push((axis, value)),
            None => warn!(
                "{}: cannot convert {} {:?} {}",
                emitter.resource().as_str(),
                keys.value,
                components,
                reference
            ),
        }
    }
    if coordinates.is_empty() {
        return Ok(0);
    }

    let location = emitter.fresh_node();
    let link = emitter.predicate(vocab::ma::HAS_RELATED_LOCATION, Exactness::Exact, LOCATION_KEY)?;
    let resource = Node::Iri(emitter.resource().clone());
    emitter.emit(Triple::new(resource, link, Term::Node(location.clone())))?;

    for (axis, value) in &coordinates {
        debug!("{:?} = {}", axis, value);
        let predicate =
            emitter.predicate(axis.target(), Exactness::Exact, fields.axis(*axis).value)?;
        let literal = Literal::typed(value.to_string(), vocab::xsd_decimal());
        emitter.emit(Triple::new(location.clone(), predicate, literal))?;
    }
    Ok(coordinates.len())
}

fn add_raw_location<S, L>(
    emitter: &mut Emitter<'_, S>,
    fields: &GeoFields,
    lookup: &L,
) -> Result<usize, MapperError>
where
    S: GraphSink,
    S::Error: std::fmt::Display,
    L: FieldLookup + ?Sized,
{
    let mut emitted = 0;
    for axis in Axis::ALL {
        let keys = fields.axis(axis);
        let Some(value) = lookup.field(keys.value) else {
            continue;
        };
        let mut parts = value.value.texts();
        if let Some(reference) = lookup.field(keys.reference) {
            parts.extend(reference.value.texts());
        }
        if parts.is_empty() {
            continue;
        }
        let literal = Literal::plain(parts.join(" "));
        emitter.emit_literal(axis.target(), Exactness::Related, keys.value, literal)?;
        emitted += 1;
    }
    Ok(emitted)
}
