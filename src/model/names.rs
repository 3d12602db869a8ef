//! Name lookup request and response models.
//!
//! This module defines the types exchanged with the portal's `/sde/names` endpoint: the
//! caller-facing [`NameRequest`] that collects IDs from any call site, the filtered
//! [`LookupRequest`] actually sent over the wire, and the [`NamesResponse`] body whose
//! string keys are validated into [`EntityId`]s before they reach the cache.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Numeric identifier of an EVE Online universe object (type, solar system, character, ...).
pub type EntityId = i64;

/// Translation table a categorized ID is resolved against.
///
/// Serialized in snake_case as the key of the `ids` map in a lookup request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameCategory {
    Type,
    Group,
    Category,
    Region,
    Constellation,
    SolarSystem,
    MarketGroup,
    Tech,
    Description,
}

impl NameCategory {
    /// Label used on the wire and in `category:id` specs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Group => "group",
            Self::Category => "category",
            Self::Region => "region",
            Self::Constellation => "constellation",
            Self::SolarSystem => "solar_system",
            Self::MarketGroup => "market_group",
            Self::Tech => "tech",
            Self::Description => "description",
        }
    }
}

impl fmt::Display for NameCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NameCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "type" => Ok(Self::Type),
            "group" => Ok(Self::Group),
            "category" => Ok(Self::Category),
            "region" => Ok(Self::Region),
            "constellation" => Ok(Self::Constellation),
            "solar_system" => Ok(Self::SolarSystem),
            "market_group" => Ok(Self::MarketGroup),
            "tech" => Ok(Self::Tech),
            "description" => Ok(Self::Description),
            other => Err(Error::ParseError(format!("unknown name category `{}`", other))),
        }
    }
}

/// IDs a caller wants resolved, grouped by category plus a flat list of universe IDs.
///
/// Absent entries (`None`) are accepted so call sites can pass optional fields such as an
/// alliance ID straight through; they are dropped before any request is built. The request
/// is not filtered here, see [`NameResolver::resolve`](crate::service::names::NameResolver::resolve).
///
/// ```ignore
/// let request = NameRequest::new()
///     .ids(NameCategory::Type, [587, 587])
///     .ids(NameCategory::SolarSystem, [30002187])
///     .esi([Some(95465499), None]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameRequest {
    pub ids: BTreeMap<NameCategory, Vec<EntityId>>,
    pub esi: Vec<EntityId>,
}

impl NameRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds IDs to resolve against `category`, appending to any IDs already queued for it.
    pub fn ids<I, T>(mut self, category: NameCategory, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Option<EntityId>>,
    {
        self.ids
            .entry(category)
            .or_default()
            .extend(
                ids.into_iter()
                    .filter_map(|id| -> Option<EntityId> { id.into() }),
            );
        self
    }

    /// Adds character, corporation or alliance IDs resolved through ESI `/universe/names`.
    pub fn esi<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Option<EntityId>>,
    {
        self.esi.extend(
            ids.into_iter()
                .filter_map(|id| -> Option<EntityId> { id.into() }),
        );
        self
    }

    /// Adds a single parsed `category:id` spec.
    pub fn with_spec(self, spec: IdSpec) -> Self {
        match spec {
            IdSpec::Category(category, id) => self.ids(category, [id]),
            IdSpec::Esi(id) => self.esi([id]),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.esi.is_empty() && self.ids.values().all(Vec::is_empty)
    }
}

/// One `category:id` pair, as accepted on the command line.
///
/// `esi:<id>` selects the universe-name channel, every other prefix must be a
/// [`NameCategory`] label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdSpec {
    Category(NameCategory, EntityId),
    Esi(EntityId),
}

impl IdSpec {
    pub fn id(&self) -> EntityId {
        match self {
            Self::Category(_, id) | Self::Esi(id) => *id,
        }
    }
}

impl FromStr for IdSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, id) = s
            .split_once(':')
            .ok_or_else(|| Error::ParseError(format!("expected `category:id`, got `{}`", s)))?;

        let id = id
            .trim()
            .parse::<EntityId>()
            .map_err(|e| Error::ParseError(format!("invalid entity ID in `{}`: {}", s, e)))?;

        match prefix.trim() {
            "esi" => Ok(Self::Esi(id)),
            category => Ok(Self::Category(category.parse()?, id)),
        }
    }
}

/// Body of a single batch call to the names endpoint.
///
/// Built by the resolver from a [`NameRequest`] after deduplication; empty groups are
/// omitted from the serialized body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupRequest {
    pub language: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub ids: BTreeMap<NameCategory, Vec<EntityId>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub esi: Vec<EntityId>,
}

impl LookupRequest {
    /// Total number of IDs carried by the request across categories and the ESI channel.
    pub fn id_count(&self) -> usize {
        self.ids.values().map(Vec::len).sum::<usize>() + self.esi.len()
    }
}

/// Raw names payload, keyed by the ID serialized as a string.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct NamesResponse(pub HashMap<String, String>);

/// Names payload after key validation.
#[derive(Debug, Default, PartialEq)]
pub struct ParsedNames {
    pub names: Vec<(EntityId, String)>,
    /// Keys that did not parse as an [`EntityId`]
    pub rejected: Vec<String>,
}

impl NamesResponse {
    /// Converts the string keys into [`EntityId`]s, separating out keys that don't parse.
    pub fn parse(self) -> ParsedNames {
        let mut parsed = ParsedNames::default();

        for (key, name) in self.0 {
            match key.trim().parse::<EntityId>() {
                Ok(id) => parsed.names.push((id, name)),
                Err(_) => parsed.rejected.push(key),
            }
        }

        parsed
    }
}
