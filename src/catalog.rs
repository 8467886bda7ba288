//! The project catalog, parsed once from the JSON embedded at build time.
//!
//! Insertion order is display and navigation order: "previous" and "next"
//! mean adjacent positions in the sequence, never id arithmetic. Ids are
//! expected to be unique and densely assigned from 1.

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Clone, PartialEq, Deserialize)]
pub struct ProjectDetail {
    pub client: Vec<String>,
    #[serde(default)]
    pub server: Option<Vec<String>>,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub imgs: Vec<String>,
    pub url: String,
    #[serde(rename = "gitHub")]
    pub git_hub: String,
    #[serde(default)]
    pub detail: Option<ProjectDetail>,
}

static PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| {
    serde_json::from_str(include_str!("../data/projects.json"))
        .expect("data/projects.json is malformed")
});

pub fn all() -> &'static [Project] {
    &PROJECTS
}

pub fn len() -> usize {
    PROJECTS.len()
}

/// Linear scan; `None` is an expected outcome (the not-found page), not a
/// failure.
pub fn find_by_id(id: u32) -> Option<&'static Project> {
    find_in(&PROJECTS, id)
}

/// Id of the project `delta` positions away from `id`, if both `id` and
/// that position exist.
pub fn neighbor_id(id: u32, delta: isize) -> Option<u32> {
    neighbor_in(&PROJECTS, id, delta)
}

fn find_in(projects: &[Project], id: u32) -> Option<&Project> {
    projects.iter().find(|p| p.id == id)
}

fn neighbor_in(projects: &[Project], id: u32, delta: isize) -> Option<u32> {
    let pos = projects.iter().position(|p| p.id == id)?;
    let target = pos.checked_add_signed(delta)?;
    projects.get(target).map(|p| p.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Project> {
        serde_json::from_str(
            r#"[
                {"id": 1, "name": "one", "description": "", "imgs": [], "url": "", "gitHub": ""},
                {"id": 2, "name": "two", "description": "", "imgs": [], "url": "", "gitHub": ""},
                {"id": 3, "name": "three", "description": "", "imgs": [], "url": "", "gitHub": ""}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn find_returns_every_present_id_and_nothing_else() {
        let projects = sample();
        for id in 1..=3 {
            assert_eq!(find_in(&projects, id).unwrap().id, id);
        }
        assert!(find_in(&projects, 0).is_none());
        assert!(find_in(&projects, 999).is_none());
    }

    #[test]
    fn next_from_the_middle_moves_one_position() {
        let projects = sample();
        assert_eq!(neighbor_in(&projects, 2, 1), Some(3));
        assert_eq!(neighbor_in(&projects, 2, -1), Some(1));
    }

    #[test]
    fn neighbor_round_trips_off_the_boundaries() {
        let projects = sample();
        let next = neighbor_in(&projects, 2, 1).unwrap();
        assert_eq!(neighbor_in(&projects, next, -1), Some(2));
    }

    #[test]
    fn neighbor_is_none_past_the_ends_or_for_unknown_ids() {
        let projects = sample();
        assert_eq!(neighbor_in(&projects, 3, 1), None);
        assert_eq!(neighbor_in(&projects, 1, -1), None);
        assert_eq!(neighbor_in(&projects, 999, 1), None);
    }

    #[test]
    fn embedded_catalog_has_unique_dense_ids_from_one() {
        let projects = all();
        assert!(!projects.is_empty());
        for (pos, project) in projects.iter().enumerate() {
            assert_eq!(project.id as usize, pos + 1);
        }
    }

    #[test]
    fn detail_lists_survive_parsing() {
        let with_detail: Project = serde_json::from_str(
            r#"{"id": 1, "name": "n", "description": "d", "imgs": ["a.png"],
                "url": "https://example.com", "gitHub": "https://github.com/x",
                "detail": {"client": ["yew"], "server": ["axum"]}}"#,
        )
        .unwrap();
        let detail = with_detail.detail.unwrap();
        assert_eq!(detail.client, vec!["yew"]);
        assert_eq!(detail.server.as_deref(), Some(&["axum".to_string()][..]));
    }
}
