use mdvault::{AliasIndex, Vault};

#[test]
fn alias_and_aliases_all_bind_to_the_owning_note() -> anyhow::Result<()> {
    let temp = tempfile::tempdir()?;
    let vault_root = temp.path().join("vault");
    std::fs::create_dir_all(&vault_root)?;
    std::fs::write(
        vault_root.join("target.md"),
        "---\nalias: baz\naliases: [foo, bar]\n---\n\n# Target\n",
    )?;

    let vault = Vault::open(&vault_root)?;
    let mut index = AliasIndex::new();
    index.rebuild(&vault);

    assert_eq!(index.len(), 3);
    for name in ["foo", "bar", "baz"] {
        let owner = index
            .resolve(name)
            .unwrap_or_else(|| panic!("alias {name} not bound"));
        assert_eq!(owner.as_str_lossy(), "target.md");
    }
    assert!(index.resolve("missing").is_none());
    Ok(())
}

#[test]
fn malformed_frontmatter_skips_that_note_only() -> anyhow::Result<()> {
    let temp = tempfile::tempdir()?;
    let vault_root = temp.path().join("vault");
    std::fs::create_dir_all(&vault_root)?;
    std::fs::write(vault_root.join("broken.md"), "---\n{ not: yaml\n---\n")?;
    std::fs::write(vault_root.join("good.md"), "---\nalias: ok\n---\n")?;
    std::fs::write(vault_root.join("plain.md"), "no frontmatter\n")?;

    let vault = Vault::open(&vault_root)?;
    let mut index = AliasIndex::new();
    index.rebuild(&vault);

    assert_eq!(index.len(), 1);
    assert_eq!(index.resolve("ok").unwrap().as_str_lossy(), "good.md");
    Ok(())
}

#[test]
fn rebuild_is_idempotent() -> anyhow::Result<()> {
    let temp = tempfile::tempdir()?;
    let vault_root = temp.path().join("vault");
    std::fs::create_dir_all(&vault_root)?;
    std::fs::write(vault_root.join("a.md"), "---\naliases: [one, two]\n---\n")?;
    std::fs::write(vault_root.join("b.md"), "---\nalias: three\n---\n")?;

    let vault = Vault::open(&vault_root)?;
    let mut index = AliasIndex::new();
    index.rebuild(&vault);
    let first: Vec<(String, String)> = index
        .iter()
        .map(|(a, p)| (a.to_string(), p.as_str_lossy()))
        .collect();

    index.rebuild(&vault);
    let second: Vec<(String, String)> = index
        .iter()
        .map(|(a, p)| (a.to_string(), p.as_str_lossy()))
        .collect();

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn colliding_alias_binds_to_exactly_one_owner() -> anyhow::Result<()> {
    let temp = tempfile::tempdir()?;
    let vault_root = temp.path().join("vault");
    std::fs::create_dir_all(&vault_root)?;
    std::fs::write(vault_root.join("first.md"), "---\nalias: shared\n---\n")?;
    std::fs::write(vault_root.join("second.md"), "---\nalias: shared\n---\n")?;

    let vault = Vault::open(&vault_root)?;
    let mut index = AliasIndex::new();
    index.rebuild(&vault);

    assert_eq!(index.len(), 1);
    let owner = index.resolve("shared").expect("alias bound").as_str_lossy();
    assert!(owner == "first.md" || owner == "second.md");
    Ok(())
}

#[test]
fn rebuild_replaces_stale_bindings() -> anyhow::Result<()> {
    let temp = tempfile::tempdir()?;
    let vault_root = temp.path().join("vault");
    std::fs::create_dir_all(&vault_root)?;
    let note = vault_root.join("a.md");
    std::fs::write(&note, "---\nalias: old\n---\n")?;

    let vault = Vault::open(&vault_root)?;
    let mut index = AliasIndex::new();
    index.rebuild(&vault);
    assert!(index.resolve("old").is_some());

    std::fs::write(&note, "---\nalias: new\n---\n")?;
    index.rebuild(&vault);
    assert!(index.resolve("old").is_none());
    assert!(index.resolve("new").is_some());
    Ok(())
}
