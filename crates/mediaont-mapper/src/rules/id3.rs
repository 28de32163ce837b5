//! ID3v2 frame rules

use mediaont_domain::vocab::ma;
use mediaont_domain::Exactness::{Exact, Related};

use crate::nodes::{language_node, person_node};
use crate::smart_title::TitleFields;
use crate::types::{LabelPredicate, MappingRule, NodeInsertion};
use crate::values::{date_literal, duration_literal, plain_literal, string_literal};

/// Content group, title and subtitle
pub(super) const TITLE_FIELDS: TitleFields = TitleFields {
    prefix: "TIT1",
    main: "TIT2",
    suffix: "TIT3",
};

const PERSON: NodeInsertion = NodeInsertion::Custom {
    node: person_node,
    label: LabelPredicate::FoafName,
};

const LANGUAGE: NodeInsertion = NodeInsertion::Custom {
    node: language_node,
    label: LabelPredicate::RdfsLabel,
};

/// Mapping of ID3v2.3/2.4 text frames
pub static ID3_RULES: &[MappingRule] = &[
    // titles
    MappingRule::direct("TIT2", ma::TITLE, Exact, string_literal),
    MappingRule::direct("TIT1", ma::TITLE, Related, string_literal),
    MappingRule::direct("TIT3", ma::TITLE, Related, string_literal),
    MappingRule::reified("TALB", ma::IS_MEMBER_OF, Exact, string_literal, NodeInsertion::Default),
    MappingRule::reified("TLAN", ma::HAS_LANGUAGE, Exact, plain_literal, LANGUAGE),
    // people
    MappingRule::reified("TPE1", ma::HAS_CREATOR, Exact, string_literal, PERSON),
    MappingRule::reified("TCOM", ma::HAS_CREATOR, Related, string_literal, PERSON),
    MappingRule::reified("TEXT", ma::HAS_CREATOR, Related, string_literal, PERSON),
    MappingRule::reified("TPE2", ma::HAS_CONTRIBUTOR, Related, string_literal, PERSON),
    MappingRule::reified("TPE3", ma::HAS_CONTRIBUTOR, Related, string_literal, PERSON),
    MappingRule::reified("TPE4", ma::HAS_CONTRIBUTOR, Related, string_literal, PERSON),
    MappingRule::reified("TIPL", ma::HAS_CONTRIBUTOR, Related, string_literal, PERSON),
    MappingRule::reified("TMCL", ma::HAS_CONTRIBUTOR, Related, string_literal, PERSON),
    MappingRule::reified("IPLS", ma::HAS_CONTRIBUTOR, Related, string_literal, PERSON),
    MappingRule::reified("TPUB", ma::HAS_PUBLISHER, Exact, string_literal, NodeInsertion::Default),
    // classification
    MappingRule::reified("TCON", ma::HAS_GENRE, Exact, string_literal, NodeInsertion::Default),
    MappingRule::reified("TMOO", ma::HAS_KEYWORD, Related, string_literal, NodeInsertion::Default),
    MappingRule::direct("COMM", ma::DESCRIPTION, Exact, string_literal),
    MappingRule::direct("TCOP", ma::COPYRIGHT, Exact, string_literal),
    // dates; the reader joins ID3v2.3 TYER and TDAT into a full date in TYER
    MappingRule::direct("TDRC", ma::RECORD_DATE, Exact, date_literal),
    MappingRule::direct("TDRL", ma::RELEASE_DATE, Exact, date_literal),
    MappingRule::direct("TDOR", ma::RELEASE_DATE, Related, date_literal),
    MappingRule::direct("TYER", ma::RECORD_DATE, Related, date_literal),
    MappingRule::direct("TDEN", ma::CREATION_DATE, Related, date_literal),
    MappingRule::direct("TLEN", ma::DURATION, Exact, duration_literal),
];
