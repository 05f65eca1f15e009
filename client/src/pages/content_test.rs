use std::collections::HashSet;

use super::*;

#[test]
fn case_study_slugs_are_unique() {
    let slugs = CASE_STUDIES.iter().map(|c| c.slug).collect::<HashSet<_>>();
    assert_eq!(slugs.len(), CASE_STUDIES.len());
}

#[test]
fn every_role_lists_achievements() {
    assert!(ROLES.iter().all(|r| !r.achievements.is_empty()));
}

#[test]
fn every_case_study_has_an_approach() {
    assert!(CASE_STUDIES.iter().all(|c| !c.approach.is_empty()));
}
