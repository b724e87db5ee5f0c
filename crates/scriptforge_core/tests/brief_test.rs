use scriptforge_core::Brief;

#[test]
fn test_brief_from_top_level_keys() -> anyhow::Result<()> {
    let brief = Brief::from_toml_str(
        r#"
        title = "Nova"
        genre = "sci-fi"
        plot = "A colony ship wakes early."
        main_characters = "Ava"
        tone = "dramatic"
        setting = "Mars"
        "#,
    )?;

    assert_eq!(brief.title(), "Nova");
    assert_eq!(brief.genre(), "sci-fi");
    assert_eq!(brief.main_characters(), "Ava");
    assert_eq!(brief.setting(), "Mars");
    Ok(())
}

#[test]
fn test_brief_from_table_with_camel_case_alias() -> anyhow::Result<()> {
    let brief = Brief::from_toml_str(
        r#"
        [brief]
        title = "Nova"
        mainCharacters = "Ava, Theo"
        "#,
    )?;

    assert_eq!(brief.main_characters(), "Ava, Theo");
    assert!(brief.plot().is_empty());
    Ok(())
}

#[test]
fn test_brief_rejects_invalid_toml() {
    let result = Brief::from_toml_str("title = ");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("brief TOML"));
}

#[test]
fn test_brief_missing_file() {
    let result = Brief::from_file("/definitely/not/here/brief.toml");
    assert!(result.is_err());
}

#[test]
fn test_brief_builder_defaults_to_empty_fields() -> anyhow::Result<()> {
    let brief = Brief::builder().title("Untitled").build()?;
    assert_eq!(brief.title(), "Untitled");
    assert!(brief.genre().is_empty());
    assert!(brief.tone().is_empty());
    Ok(())
}

#[test]
fn test_export_filename_sanitizes_separators() -> anyhow::Result<()> {
    let brief = Brief::builder().title("  Mars/Venus  ").build()?;
    assert_eq!(brief.export_filename("txt"), "Mars_Venus.txt");

    let blank = Brief::builder().title("   ").build()?;
    assert_eq!(blank.export_filename("txt"), "Movie_Script.txt");
    Ok(())
}
