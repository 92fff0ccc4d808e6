use frmaps::map::{self, AreaId, SvgTemplates};

#[test]
fn department_map_config_is_complete() {
    let templates = SvgTemplates::load().expect("bundled assets should load");
    let config = map::departements(&templates);

    assert_eq!(config.kind, "departement");
    assert_eq!(config.area_prefix, "z");
    assert_eq!(config.x_labels.len(), 101);
    assert_eq!(config.area_names.len(), 101);

    // the template must carry one identifiable shape per listed area
    for code in &config.x_labels {
        let id = format!("id=\"{}{}\"", config.area_prefix, code);
        assert!(
            config.svg_map.contains(&id),
            "department template has no shape for '{}'",
            code
        );
    }
}

#[test]
fn region_map_config_is_complete() {
    let templates = SvgTemplates::load().expect("bundled assets should load");
    let config = map::regions(&templates);

    assert_eq!(config.kind, "region");
    assert_eq!(config.area_prefix, "a");
    assert_eq!(config.x_labels.len(), 18);
    assert_eq!(config.area_names.len(), 18);

    for code in &config.x_labels {
        let id = format!("id=\"{}{}\"", config.area_prefix, code);
        assert!(
            config.svg_map.contains(&id),
            "region template has no shape for '{}'",
            code
        );
    }
}

#[test]
fn configured_adapt_code_normalizes_before_lookup() {
    let templates = SvgTemplates::load().expect("bundled assets should load");
    let config = map::departements(&templates);

    let key = (config.adapt_code)(&AreaId::Number(1));
    assert_eq!(key, "01");
    assert_eq!(config.area_names.get(key.as_str()), Some(&"Ain"));
}

#[test]
fn svg_templates_pass_through_unmodified() {
    let templates = SvgTemplates::load().expect("bundled assets should load");
    let config = map::regions(&templates);
    assert_eq!(config.svg_map, templates.regions);
}
