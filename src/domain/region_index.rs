//! Region Index
//!
//! Groups the store's pings by region in a single pass.

use crate::domain::entities::Ping;
use crate::domain::store::TelemetryStore;
use std::collections::HashMap;

/// Mapping from region to the pings recorded for it.
///
/// Every ping of the store lands in exactly one bucket and keeps its
/// relative order inside that bucket. The index is never updated; a new
/// store needs a new index.
#[derive(Debug, Clone, Default)]
pub struct RegionIndex {
    buckets: HashMap<String, Vec<Ping>>,
    /// Regions in order of first appearance in the store
    order: Vec<String>,
    total: usize,
}

impl RegionIndex {
    /// Build the index from a store.
    pub fn build(store: &TelemetryStore) -> Self {
        let mut buckets: HashMap<String, Vec<Ping>> = HashMap::new();
        let mut order = Vec::new();

        for ping in store.pings() {
            buckets
                .entry(ping.region.clone())
                .or_insert_with(|| {
                    order.push(ping.region.clone());
                    Vec::new()
                })
                .push(ping.clone());
        }

        Self {
            buckets,
            order,
            total: store.len(),
        }
    }

    /// Pings for a region. Unknown regions yield an empty slice.
    pub fn lookup(&self, region: &str) -> &[Ping] {
        self.buckets
            .get(region)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Known regions, in order of first appearance.
    pub fn regions(&self) -> &[String] {
        &self.order
    }

    pub fn region_count(&self) -> usize {
        self.order.len()
    }

    /// Number of pings indexed across all regions.
    pub fn ping_count(&self) -> usize {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> TelemetryStore {
        TelemetryStore::new(vec![
            Ping::new("emea", 120.0, 0.998),
            Ping::new("amer", 95.0, 0.995),
            Ping::new("emea", 210.0, 0.997),
            Ping::new("apac", 300.0, 0.990),
            Ping::new("amer", 88.0, 0.999),
        ])
    }

    #[test]
    fn test_lookup_groups_by_region() {
        let index = RegionIndex::build(&sample_store());
        let emea: Vec<f64> = index.lookup("emea").iter().map(|p| p.latency_ms).collect();
        assert_eq!(emea, vec![120.0, 210.0]);
        assert_eq!(index.lookup("apac").len(), 1);
    }

    #[test]
    fn test_lookup_unknown_is_empty() {
        let index = RegionIndex::build(&sample_store());
        assert!(index.lookup("mars").is_empty());
        assert!(index.lookup("").is_empty());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let index = RegionIndex::build(&sample_store());
        assert!(index.lookup("EMEA").is_empty());
    }

    #[test]
    fn test_buckets_partition_the_store() {
        let store = sample_store();
        let index = RegionIndex::build(&store);

        let total: usize = index.regions().iter().map(|r| index.lookup(r).len()).sum();
        assert_eq!(total, store.len());
        assert_eq!(index.ping_count(), store.len());

        for region in index.regions() {
            assert!(index.lookup(region).iter().all(|p| &p.region == region));
        }
    }

    #[test]
    fn test_regions_in_first_seen_order() {
        let index = RegionIndex::build(&sample_store());
        assert_eq!(index.regions(), ["emea", "amer", "apac"]);
        assert_eq!(index.region_count(), 3);
    }

    #[test]
    fn test_empty_store() {
        let index = RegionIndex::build(&TelemetryStore::default());
        assert_eq!(index.region_count(), 0);
        assert_eq!(index.ping_count(), 0);
        assert!(index.lookup("emea").is_empty());
    }
}
