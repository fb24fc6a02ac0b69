/// Travel time per reachable id, in response order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReachabilityMap {
    entries: Vec<(String, i32)>,
}

impl ReachabilityMap {
    pub(crate) fn new(entries: Vec<(String, i32)>) -> Self {
        Self { entries }
    }

    pub fn travel_time(&self, id: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .map(|(_, travel_time)| *travel_time)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.entries
            .iter()
            .map(|(id, travel_time)| (id.as_str(), *travel_time))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
