use fxhash::{FxBuildHasher, FxHashMap};

use super::*;

const INITIAL_CAPACITY: usize = 1_000;
const DEFAULT_MAX_CAPACITY: usize = 1_000_000;
const EVICTION_SEARCH: usize = 100;

/// Exact key of a labelled graph: number of nodes and sorted, normalized edge list.
/// Unlike a digest it cannot collide.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GraphKey {
    number_of_nodes: NumNodes,
    edges: Vec<Edge>,
}

impl GraphKey {
    pub fn of<G: AdjacencyList>(graph: &G) -> Self {
        Self {
            number_of_nodes: graph.number_of_nodes(),
            edges: graph.ordered_edges().collect(),
        }
    }
}

struct CacheEntry<V> {
    timestamp: u64,
    value: V,
}

/// Memoizes results of pure graph functions. Entries are evicted (approximately least
/// recently used) once the capacity is exceeded.
pub struct ResultCache<K, V> {
    cache: FxHashMap<K, CacheEntry<V>>,
    capacity: usize,
    timestamp: u64,
    number_of_misses: u64,
    number_of_accesses: u64,
}

/// Cache of invariant values, keyed by the labelled graph
pub type AlphaCache = ResultCache<GraphKey, Alpha>;

impl<K, V> Default for ResultCache<K, V>
where
    K: Eq + std::hash::Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> ResultCache<K, V>
where
    K: Eq + std::hash::Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            cache: FxHashMap::with_capacity_and_hasher(INITIAL_CAPACITY, FxBuildHasher::default()),
            capacity: DEFAULT_MAX_CAPACITY,
            timestamp: 0,
            number_of_misses: 0,
            number_of_accesses: 0,
        }
    }

    /// Sets new capacity of the cache without reserving actual memory.
    ///
    /// # Warning
    /// Erases cache if the current number of elements exceeds the new cache size
    pub fn set_capacity(&mut self, capacity: usize) {
        if self.cache.len() > capacity {
            self.cache = FxHashMap::with_capacity_and_hasher(capacity + 1, FxBuildHasher::default())
        }
        self.capacity = capacity;
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn number_of_cache_hits(&self) -> u64 {
        self.number_of_accesses - self.number_of_misses
    }

    pub fn number_of_cache_misses(&self) -> u64 {
        self.number_of_misses
    }

    pub fn add_to_cache(&mut self, key: K, value: V) {
        if self.cache.len() >= self.capacity {
            self.evict_element()
        }
        self.cache.insert(
            key,
            CacheEntry {
                timestamp: self.timestamp,
                value,
            },
        );
        self.timestamp += 1;
    }

    pub fn get(&mut self, key: &K) -> Option<&V> {
        self.number_of_accesses += 1;
        self.timestamp += 1;

        match self.cache.get_mut(key) {
            Some(entry) => {
                entry.timestamp = self.timestamp;
                Some(&entry.value)
            }
            None => {
                self.number_of_misses += 1;
                None
            }
        }
    }

    /// Returns the cached value for `key` or computes, stores and returns it.
    /// Errors of `compute` are passed through and not cached.
    pub fn get_or_try_compute<E, F>(&mut self, key: K, compute: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(value) = self.get(&key) {
            return Ok(value.clone());
        }

        let value = compute()?;
        self.add_to_cache(key, value.clone());
        Ok(value)
    }

    fn evict_element(&mut self) {
        // we assume that the iteration order of the hash table is random
        // then we do not have a considerable bias from only evicting from the beginning
        let key_to_evict = self
            .cache
            .iter()
            .take(EVICTION_SEARCH)
            .min_by_key(|(_, entry)| entry.timestamp)
            .map(|(key, _)| key.clone());

        if let Some(key) = key_to_evict {
            self.cache.remove(&key);
        }
    }
}

impl AlphaCache {
    /// Memoized [`alpha_od_with`]
    pub fn alpha_od<B: IlpBackend, G: FullfledgedGraph>(
        &mut self,
        graph: &G,
        config: &SolverConfig,
    ) -> Result<Alpha, SolverError> {
        self.get_or_try_compute(GraphKey::of(graph), || {
            alpha_od_with::<B, G>(graph, config)
        })
    }
}
