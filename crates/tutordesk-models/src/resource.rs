//! Traits tying a model to its REST endpoint.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::hash::Hash;

/// A record served by a flat REST collection at `/{PATH}`.
pub trait Resource: Clone + fmt::Debug + DeserializeOwned + Send + Sync + 'static {
    type Id: Copy + Eq + Hash + fmt::Debug + fmt::Display + Serialize + Send + Sync + 'static;

    /// Collection path relative to the API base URL, without slashes.
    const PATH: &'static str;

    /// Singular noun used in log fields and messages.
    const LABEL: &'static str;

    fn id(&self) -> Self::Id;
}

/// A resource whose records embed an ordered list of children.
///
/// Children live in their own flat collection (`Child::PATH`) and point back
/// at their parent through `PARENT_KEY` in request payloads.
pub trait ParentResource: Resource {
    type Child: Resource;

    /// Payload field naming the parent of a child record.
    const PARENT_KEY: &'static str;

    fn children(&self) -> &[Self::Child];

    fn children_mut(&mut self) -> &mut Vec<Self::Child>;
}
