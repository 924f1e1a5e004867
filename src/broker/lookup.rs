//! API version lookup / request dispatch.
//!
//! Once a connection has completed version negotiation, every subsequent
//! RPC call resolves the version it will actually send through this table:
//! the broker's advertised `(min, max)` range for the API, intersected with
//! this crate's own supported range for that request type, picking the
//! highest version both sides agree on.

use std::collections::HashMap;

use crate::protocol::api_key::ApiKey;
use crate::protocol::api_version::{ApiVersion, ApiVersionRange};
use crate::protocol::messages::RequestBody;

use super::error::Error;

#[derive(Debug, Clone, Default)]
pub struct VersionTable {
    broker_ranges: HashMap<ApiKey, ApiVersionRange>,
}

impl VersionTable {
    pub fn new(broker_ranges: HashMap<ApiKey, ApiVersionRange>) -> Self {
        Self { broker_ranges }
    }

    /// Resolve the version to use for `B`, or `Err` if the broker's
    /// advertised range for `B::API_KEY` and this crate's own supported
    /// range for `B` don't overlap at all.
    pub fn resolve<B: RequestBody>(&self) -> Result<ApiVersion, Error> {
        let ours = B::API_VERSION_RANGE;
        let theirs = self
            .broker_ranges
            .get(&B::API_KEY)
            .copied()
            .unwrap_or(ours);

        let min = ours.min().max(theirs.min());
        let max = ours.max().min(theirs.max());

        if min.0 > max.0 {
            return Err(Error::UnsupportedVersion(ours));
        }

        Ok(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::messages::api_versions::ApiVersionsRequest;

    #[test]
    fn resolves_to_highest_common_version() {
        let mut ranges = HashMap::new();
        ranges.insert(ApiKey::ApiVersions, ApiVersionRange::new(0, 2));
        let table = VersionTable::new(ranges);

        let resolved = table.resolve::<ApiVersionsRequest>().unwrap();
        assert_eq!(resolved, ApiVersion(2));
    }

    #[test]
    fn unknown_api_key_defaults_to_our_own_range() {
        let table = VersionTable::new(HashMap::new());
        let resolved = table.resolve::<ApiVersionsRequest>().unwrap();
        assert_eq!(resolved, ApiVersionsRequest::API_VERSION_RANGE.max());
    }

    #[test]
    fn disjoint_ranges_are_unsupported() {
        let mut ranges = HashMap::new();
        ranges.insert(ApiKey::ApiVersions, ApiVersionRange::new(10, 12));
        let table = VersionTable::new(ranges);

        let err = table.resolve::<ApiVersionsRequest>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedVersion(_)));
    }
}
