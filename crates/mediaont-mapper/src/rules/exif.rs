//! EXIF tag rules
//!
//! Keys are the tag names kamadak-exif prints (`DateTimeOriginal`,
//! `PixelXDimension`, ...). GPS tags go through the geo resolver instead.

use mediaont_domain::vocab::ma;
use mediaont_domain::Exactness::{Exact, Related};

use crate::geo::{AxisFields, GeoFields};
use crate::nodes::person_node;
use crate::types::{LabelPredicate, MappingRule, NodeInsertion};
use crate::values::{date_literal, decimal_literal, plain_literal, string_literal};

pub(super) const GEO_FIELDS: GeoFields = GeoFields {
    latitude: AxisFields {
        value: "GPSLatitude",
        reference: "GPSLatitudeRef",
    },
    longitude: AxisFields {
        value: "GPSLongitude",
        reference: "GPSLongitudeRef",
    },
    altitude: AxisFields {
        value: "GPSAltitude",
        reference: "GPSAltitudeRef",
    },
};

const PERSON: NodeInsertion = NodeInsertion::Custom {
    node: person_node,
    label: LabelPredicate::FoafName,
};

/// Mapping of EXIF/TIFF tags
pub static EXIF_RULES: &[MappingRule] = &[
    MappingRule::direct("ImageDescription", ma::DESCRIPTION, Exact, string_literal),
    MappingRule::direct("UserComment", ma::DESCRIPTION, Related, string_literal),
    MappingRule::reified("Artist", ma::HAS_CREATOR, Exact, string_literal, PERSON),
    MappingRule::direct("Copyright", ma::COPYRIGHT, Exact, string_literal),
    MappingRule::direct("DateTimeOriginal", ma::CREATION_DATE, Exact, date_literal),
    MappingRule::direct("DateTimeDigitized", ma::CREATION_DATE, Related, date_literal),
    MappingRule::direct("DateTime", ma::EDIT_DATE, Exact, date_literal),
    MappingRule::direct("PixelXDimension", ma::FRAME_WIDTH, Exact, decimal_literal),
    MappingRule::direct("PixelYDimension", ma::FRAME_HEIGHT, Exact, decimal_literal),
    MappingRule::direct("ImageWidth", ma::FRAME_WIDTH, Related, decimal_literal),
    MappingRule::direct("ImageLength", ma::FRAME_HEIGHT, Related, decimal_literal),
    MappingRule::direct("Compression", ma::HAS_COMPRESSION, Related, plain_literal),
];
