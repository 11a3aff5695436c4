use mdvault::{find_tags, TagIndex, Vault};

#[test]
fn rebuild_unions_tags_across_notes() -> anyhow::Result<()> {
    let temp = tempfile::tempdir()?;
    let vault_root = temp.path().join("vault");
    std::fs::create_dir_all(&vault_root)?;
    std::fs::write(vault_root.join("a.md"), "alpha #shared #only-a\n")?;
    std::fs::write(vault_root.join("b.md"), "beta #shared #only-b\n")?;
    std::fs::write(vault_root.join("skip.txt"), "#not-indexed\n")?;

    let vault = Vault::open(&vault_root)?;
    let mut index = TagIndex::new();
    index.rebuild(&vault);

    assert!(index.tags().contains("#shared"));
    assert!(index.tags().contains("#only-a"));
    assert!(index.tags().contains("#only-b"));
    assert!(!index.tags().contains("#not-indexed"));
    assert_eq!(index.len(), 3);
    Ok(())
}

#[test]
fn rebuild_replaces_the_catalog_wholesale() -> anyhow::Result<()> {
    let temp = tempfile::tempdir()?;
    let vault_root = temp.path().join("vault");
    std::fs::create_dir_all(&vault_root)?;
    let note = vault_root.join("a.md");
    std::fs::write(&note, "#before\n")?;

    let vault = Vault::open(&vault_root)?;
    let mut index = TagIndex::new();
    index.rebuild(&vault);
    assert!(index.tags().contains("#before"));

    std::fs::write(&note, "#after\n")?;
    index.rebuild(&vault);
    assert!(!index.tags().contains("#before"));
    assert!(index.tags().contains("#after"));
    Ok(())
}

#[test]
fn raw_extraction_keeps_case_variants_expansion_folds_them() -> anyhow::Result<()> {
    let text = "see #project-a and #Project-A";
    let raw = find_tags(text);
    assert_eq!(raw.len(), 2);

    let temp = tempfile::tempdir()?;
    let vault_root = temp.path().join("vault");
    std::fs::create_dir_all(&vault_root)?;
    std::fs::write(vault_root.join("a.md"), text)?;

    let vault = Vault::open(&vault_root)?;
    let mut index = TagIndex::new();
    index.rebuild(&vault);

    let expanded = index.expand_for_completion();
    assert!(expanded.contains("#project-a"));
    assert!(expanded.contains("#Project-a"));
    assert!(expanded.contains("#Project-A"));
    Ok(())
}

#[test]
fn completion_candidates_filter_by_prefix() -> anyhow::Result<()> {
    let temp = tempfile::tempdir()?;
    let vault_root = temp.path().join("vault");
    std::fs::create_dir_all(&vault_root)?;
    std::fs::write(vault_root.join("a.md"), "#work #Home #work/deep\n")?;

    let vault = Vault::open(&vault_root)?;
    let mut index = TagIndex::new();
    index.rebuild(&vault);

    let candidates = index.completion_candidates("#work");
    assert!(candidates.contains(&"#work".to_string()));
    assert!(candidates.contains(&"#work/deep".to_string()));
    assert!(candidates.iter().all(|c| c.starts_with("#work")));
    Ok(())
}
