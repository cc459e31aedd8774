//! Hierarchical description builder.
//!
//! Nomenclature records form a parent-pointer forest whose roots are the
//! level-"10" chapters. The full description of a record is the chapter
//! description down to its own, joined with `---`. Feeds occasionally ship
//! broken links (missing parents, self references, even cycles), so the
//! resolver caps ascent depth and returns whatever was accumulated instead
//! of failing the run.
//!
//! Output files use `;` as the field delimiter, so every description segment
//! has embedded semicolons replaced with `.` before concatenation.

use std::collections::BTreeMap;

use tariff_model::NomenclatureRecord;

const SEPARATOR: &str = "---";
const CHAPTER_LEVEL: &str = "10";
const MAX_DEPTH: usize = 20;

struct Node {
    parent_id: String,
    description: String,
    level: String,
}

fn sanitize(text: &str) -> String {
    text.replace(';', ".")
}

/// Compute `full_description` for every record in the table.
pub fn build_full_descriptions(records: &mut [NomenclatureRecord]) {
    let index: BTreeMap<String, Node> = records
        .iter()
        .map(|record| {
            (
                record.id.clone(),
                Node {
                    parent_id: record.parent_id.clone(),
                    description: sanitize(&record.official_description),
                    level: record.level_id.clone(),
                },
            )
        })
        .collect();

    let mut memo: BTreeMap<String, String> = BTreeMap::new();
    for record in records.iter_mut() {
        let full = if index.contains_key(&record.id) {
            resolve(&record.id, &index, &mut memo, 0)
        } else {
            sanitize(&record.official_description)
        };
        record.full_description = Some(full);
    }
}

fn resolve(
    id: &str,
    index: &BTreeMap<String, Node>,
    memo: &mut BTreeMap<String, String>,
    depth: usize,
) -> String {
    let Some(node) = index.get(id) else {
        return String::new();
    };
    if let Some(cached) = memo.get(id) {
        return cached.clone();
    }
    if node.level == CHAPTER_LEVEL {
        memo.insert(id.to_string(), node.description.clone());
        return node.description.clone();
    }

    let has_usable_parent = !node.parent_id.is_empty() && node.parent_id != id;
    let parent_full = if has_usable_parent && depth < MAX_DEPTH {
        resolve(&node.parent_id, index, memo, depth + 1)
    } else {
        String::new()
    };

    let full = if parent_full.is_empty() {
        node.description.clone()
    } else {
        format!("{parent_full}{SEPARATOR}{}", node.description)
    };
    memo.insert(id.to_string(), full.clone());
    full
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, parent_id: &str, level: &str, desc: &str) -> NomenclatureRecord {
        NomenclatureRecord {
            id: id.to_string(),
            parent_id: parent_id.to_string(),
            level_id: level.to_string(),
            official_description: desc.to_string(),
            ..NomenclatureRecord::default()
        }
    }

    #[test]
    fn three_level_round_trip() {
        let mut records = vec![
            record("1", "", "10", "Salt; sulphur"),
            record("2", "1", "20", "Salt"),
            record("3", "2", "40", "Table salt"),
        ];
        build_full_descriptions(&mut records);
        assert_eq!(records[0].full_description.as_deref(), Some("Salt. sulphur"));
        assert_eq!(
            records[2].full_description.as_deref(),
            Some("Salt. sulphur---Salt---Table salt")
        );
    }

    #[test]
    fn level_50_lines_resolve_through_their_parent() {
        let mut records = vec![
            record("1", "", "10", "Chapter"),
            record("2", "1", "40", "Heading"),
            record("3", "2", "50", "Unit line"),
        ];
        build_full_descriptions(&mut records);
        assert_eq!(
            records[2].full_description.as_deref(),
            Some("Chapter---Heading---Unit line")
        );
    }

    #[test]
    fn self_reference_keeps_own_description() {
        let mut records = vec![record("7", "7", "30", "Loop")];
        build_full_descriptions(&mut records);
        assert_eq!(records[0].full_description.as_deref(), Some("Loop"));
    }

    #[test]
    fn dangling_parent_keeps_own_description() {
        let mut records = vec![record("5", "does-not-exist", "30", "Orphan")];
        build_full_descriptions(&mut records);
        assert_eq!(records[0].full_description.as_deref(), Some("Orphan"));
    }

    #[test]
    fn long_cycle_terminates() {
        // 30 records in a single cycle, none at chapter level.
        let mut records: Vec<NomenclatureRecord> = (0..30)
            .map(|i| {
                record(
                    &format!("n{i}"),
                    &format!("n{}", (i + 1) % 30),
                    "30",
                    &format!("d{i}"),
                )
            })
            .collect();
        build_full_descriptions(&mut records);
        for rec in &records {
            let full = rec.full_description.as_deref().expect("resolved");
            assert!(!full.is_empty());
            // Depth cap bounds the number of joined segments.
            assert!(full.matches(SEPARATOR).count() <= MAX_DEPTH);
        }
    }
}
