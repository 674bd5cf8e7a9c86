use bully::{new_err, BullyError, NodeName, NodeOrdering};
use std::cmp::Ordering;

/// Orders nodes by the decimal number their name starts with: "3@host-c" has identity 3.
/// Names without the numeric prefix are malformed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct NumericPrefixOrdering;

impl NumericPrefixOrdering {
    pub fn identity(&self, node_name: &NodeName) -> Result<u64, BullyError> {
        let name = node_name.as_str();
        let prefix_len = name
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or_else(|| name.len());

        if prefix_len == 0 {
            return new_err(
                format!("Malformed node name {}", node_name),
                "no numeric prefix".to_string(),
            );
        }

        match name[..prefix_len].parse::<u64>() {
            Ok(identity) => Ok(identity),
            Err(err) => new_err(format!("Malformed node name {}", node_name), err.to_string()),
        }
    }
}

impl NodeOrdering for NumericPrefixOrdering {
    fn compare(&self, left: &NodeName, right: &NodeName) -> Result<Ordering, BullyError> {
        Ok(self.identity(left)?.cmp(&self.identity(right)?))
    }
}

/// Orders nodes by their full names.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct LexicographicOrdering;

impl NodeOrdering for LexicographicOrdering {
    fn compare(&self, left: &NodeName, right: &NodeName) -> Result<Ordering, BullyError> {
        Ok(left.as_str().cmp(right.as_str()))
    }
}
