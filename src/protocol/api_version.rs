#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct ApiVersion(pub i16);

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ApiVersionRange {
    min: ApiVersion,
    max: ApiVersion,
}

impl std::fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ApiVersionRange {
    pub const fn new(min: i16, max: i16) -> Self {
        assert!(min <= max);

        Self {
            min: ApiVersion(min),
            max: ApiVersion(max),
        }
    }

    pub fn min(&self) -> ApiVersion {
        self.min
    }

    pub fn max(&self) -> ApiVersion {
        self.max
    }

    pub fn contains(&self, version: ApiVersion) -> bool {
        self.min <= version && version <= self.max
    }
}

impl std::fmt::Display for ApiVersionRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn contains_is_inclusive_of_both_bounds() {
        let range = ApiVersionRange::new(1, 3);
        assert!(range.contains(ApiVersion(1)));
        assert!(range.contains(ApiVersion(3)));
        assert!(!range.contains(ApiVersion(0)));
        assert!(!range.contains(ApiVersion(4)));
    }

    proptest! {
        #[test]
        fn contains_matches_min_max_comparison(lo: i16, hi: i16, probe: ApiVersion) {
            prop_assume!(lo <= hi);
            let range = ApiVersionRange::new(lo, hi);
            prop_assert_eq!(range.contains(probe), lo <= probe.0 && probe.0 <= hi);
        }
    }
}
