use serde::{Deserialize, Deserializer};

/// Three-state field patch: a JSON field that is absent keeps the stored value,
/// an explicit `null` clears it, and a value overwrites it.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Patch<T> {
    #[default]
    Keep,
    Clear,
    Set(T),
}

impl<T> Patch<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, Patch::Keep)
    }

    /// Apply onto an optional slot, leaving it untouched for `Keep`.
    pub fn apply(self, slot: &mut Option<T>) {
        match self {
            Patch::Keep => {}
            Patch::Clear => *slot = None,
            Patch::Set(v) => *slot = Some(v),
        }
    }

    /// The value this patch would store, meaningless for `Keep`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Patch::Set(v) => Some(v),
            _ => None,
        }
    }
}

// Deserialization only distinguishes null from a value; "absent" is handled by
// `#[serde(default)]` on the containing struct field, which yields `Keep`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Patch::Set(v),
            None => Patch::Clear,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Payload {
        #[serde(default)]
        role: Patch<String>,
    }

    #[test]
    fn absent_field_is_keep() {
        let p: Payload = serde_json::from_str("{}").unwrap();
        assert_eq!(p.role, Patch::Keep);
    }

    #[test]
    fn null_field_is_clear() {
        let p: Payload = serde_json::from_str(r#"{"role": null}"#).unwrap();
        assert_eq!(p.role, Patch::Clear);
    }

    #[test]
    fn value_field_is_set() {
        let p: Payload = serde_json::from_str(r#"{"role": "cashier"}"#).unwrap();
        assert_eq!(p.role, Patch::Set("cashier".into()));
    }

    #[test]
    fn apply_semantics() {
        let mut slot = Some("floor".to_string());
        Patch::Keep.apply(&mut slot);
        assert_eq!(slot.as_deref(), Some("floor"));
        Patch::Set("till".to_string()).apply(&mut slot);
        assert_eq!(slot.as_deref(), Some("till"));
        Patch::<String>::Clear.apply(&mut slot);
        assert_eq!(slot, None);
    }
}
