use super::{
    grouping::{group_by_category, CategoryGroups},
    recommendation::RecommendationEntry,
    resource::ResourceRecord,
};

/// Resolves each recommendation to a directory record, looking in `narrow`
/// (records fetched by name) before `broad` (the whole directory).
///
/// Every category that had an entry keeps its key even when nothing in it
/// resolved. Unresolved entries are dropped.
pub fn match_recommendations(
    entries: &[RecommendationEntry],
    narrow: &[ResourceRecord],
    broad: &[ResourceRecord],
) -> CategoryGroups<ResourceRecord> {
    let mut matched = CategoryGroups::new();

    for (category, bucket) in group_by_category(entries) {
        matched.ensure(&category);
        for entry in bucket {
            if let Some(record) = find_by_name(narrow, &entry.name)
                .or_else(|| find_by_name(broad, &entry.name))
            {
                matched.push(&category, record.clone());
            }
        }
    }

    matched
}

fn find_by_name<'a>(records: &'a [ResourceRecord], name: &str) -> Option<&'a ResourceRecord> {
    records.iter().find(|r| r.name == name)
}

/// Names in grouped order, which is the order the narrow fetch asks for them.
pub fn recommendation_names(groups: &CategoryGroups<RecommendationEntry>) -> Vec<String> {
    groups
        .iter()
        .flat_map(|(_, bucket)| bucket.iter().map(|e| e.name.clone()))
        .collect()
}
