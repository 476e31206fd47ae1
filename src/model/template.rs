use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Configured decay rate in capture points per second.
///
/// `Infinite` is the sentinel that turns the entity into a territory-owned
/// entity: its ownership follows the tile it stands on and it never decays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecayRate {
    Finite(f64),
    Infinite,
}

impl DecayRate {
    /// A finite, non-negative rate. Rejects NaN, infinities and negatives.
    pub fn finite(rate: f64) -> Result<Self, String> {
        if !rate.is_finite() {
            return Err(format!("decay rate must be finite, got {rate}"));
        }
        if rate < 0.0 {
            return Err(format!("decay rate must be non-negative, got {rate}"));
        }
        Ok(DecayRate::Finite(rate))
    }

    pub fn as_f64(self) -> f64 {
        match self {
            DecayRate::Finite(rate) => rate,
            DecayRate::Infinite => f64::INFINITY,
        }
    }

    pub fn is_infinite(self) -> bool {
        matches!(self, DecayRate::Infinite)
    }
}

const INFINITY_TOKEN: &str = "Infinity";

impl Serialize for DecayRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DecayRate::Finite(rate) => serializer.serialize_f64(*rate),
            DecayRate::Infinite => serializer.serialize_str(INFINITY_TOKEN),
        }
    }
}

impl<'de> Deserialize<'de> for DecayRate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawRate {
            Number(f64),
            Text(String),
        }

        match RawRate::deserialize(deserializer)? {
            RawRate::Number(rate) => DecayRate::finite(rate).map_err(de::Error::custom),
            RawRate::Text(s) if s == INFINITY_TOKEN => Ok(DecayRate::Infinite),
            RawRate::Text(s) => s
                .parse::<f64>()
                .map_err(|_| de::Error::custom(format!("invalid decay rate: {s}")))
                .and_then(|rate| DecayRate::finite(rate).map_err(de::Error::custom)),
        }
    }
}

/// Foreign territory kinds named by a template's territory filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TerritoryKind {
    Neutral,
    Enemy,
}

string_enum!(TerritoryKind {
    Neutral => "neutral",
    Enemy => "enemy",
});

/// Per-template TerritoryDecay configuration.
///
/// ```json
/// { "decay_rate": 2.5, "territory": ["enemy"] }
/// { "decay_rate": "Infinity" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TerritoryDecayTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decay_rate: Option<DecayRate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub territory: Option<Vec<TerritoryKind>>,
}

impl TerritoryDecayTemplate {
    /// Template for a conventional decaying asset. Negative or non-finite
    /// rates are clamped out by falling back to zero.
    pub fn decaying(rate: f64) -> Self {
        Self {
            decay_rate: Some(DecayRate::finite(rate).unwrap_or(DecayRate::Finite(0.0))),
            territory: None,
        }
    }

    /// Template whose ownership follows the tile it stands on.
    pub fn territory_owned() -> Self {
        Self {
            decay_rate: Some(DecayRate::Infinite),
            territory: None,
        }
    }

    pub fn with_territory(mut self, kinds: impl IntoIterator<Item = TerritoryKind>) -> Self {
        self.territory = Some(kinds.into_iter().collect());
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid TerritoryDecay template: {e}"))
    }
}

/// Named templates, e.g. loaded once from a JSON document at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateSet {
    templates: BTreeMap<String, TerritoryDecayTemplate>,
}

impl TemplateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, template: TerritoryDecayTemplate) {
        self.templates.insert(name.into(), template);
    }

    pub fn get(&self, name: &str) -> Option<&TerritoryDecayTemplate> {
        self.templates.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn from_json_str(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid template set: {e}"))
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let json = fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_finite_rate_and_filter() {
        let t = TerritoryDecayTemplate::from_json_str(
            r#"{"decay_rate": 2.5, "territory": ["neutral", "enemy"]}"#,
        )
        .unwrap();
        assert_eq!(t.decay_rate, Some(DecayRate::Finite(2.5)));
        assert_eq!(
            t.territory,
            Some(vec![TerritoryKind::Neutral, TerritoryKind::Enemy])
        );
    }

    #[test]
    fn parses_infinity_sentinel() {
        let t = TerritoryDecayTemplate::from_json_str(r#"{"decay_rate": "Infinity"}"#).unwrap();
        assert_eq!(t.decay_rate, Some(DecayRate::Infinite));
        assert!(t.decay_rate.unwrap().is_infinite());
        assert_eq!(t.decay_rate.unwrap().as_f64(), f64::INFINITY);
    }

    #[test]
    fn numeric_string_rate_is_accepted() {
        let t = TerritoryDecayTemplate::from_json_str(r#"{"decay_rate": "4"}"#).unwrap();
        assert_eq!(t.decay_rate, Some(DecayRate::Finite(4.0)));
    }

    #[test]
    fn negative_rate_rejected() {
        let err = TerritoryDecayTemplate::from_json_str(r#"{"decay_rate": -1.0}"#).unwrap_err();
        assert!(err.contains("non-negative"), "unexpected error: {err}");
    }

    #[test]
    fn unknown_territory_kind_rejected() {
        let err = TerritoryDecayTemplate::from_json_str(r#"{"territory": ["ally"]}"#).unwrap_err();
        assert!(err.contains("unknown TerritoryKind"), "unexpected error: {err}");
    }

    #[test]
    fn unknown_field_rejected() {
        assert!(TerritoryDecayTemplate::from_json_str(r#"{"rate": 1.0}"#).is_err());
    }

    #[test]
    fn empty_template_has_no_configuration() {
        let t = TerritoryDecayTemplate::from_json_str("{}").unwrap();
        assert_eq!(t, TerritoryDecayTemplate::default());
    }

    #[test]
    fn serializes_back_to_template_format() {
        let t = TerritoryDecayTemplate::territory_owned().with_territory([TerritoryKind::Enemy]);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"decay_rate":"Infinity","territory":["enemy"]}"#);
    }

    #[test]
    fn decaying_constructor_falls_back_to_zero() {
        assert_eq!(
            TerritoryDecayTemplate::decaying(-3.0).decay_rate,
            Some(DecayRate::Finite(0.0))
        );
    }

    #[test]
    fn template_set_by_name() {
        let set = TemplateSet::from_json_str(
            r#"{
                "structures/outpost": {"decay_rate": 1.0, "territory": ["neutral"]},
                "gaia/relic": {"decay_rate": "Infinity"}
            }"#,
        )
        .unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(
            set.names().collect::<Vec<_>>(),
            vec!["gaia/relic", "structures/outpost"]
        );
        assert!(set.get("gaia/relic").unwrap().decay_rate.unwrap().is_infinite());
        assert!(set.get("missing").is_none());
    }
}
