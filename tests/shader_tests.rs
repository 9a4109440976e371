//! Shader validation tests.
//!
//! The WGSL source is a compiled-in constant, so its well-formedness can be
//! checked on the CPU with naga, the same frontend wgpu uses. This also pins
//! the failure mode for bad source: a non-empty diagnostic, never a silent
//! zero handle.

use naga::valid::{Capabilities, ValidationFlags, Validator};

fn validate(source: &str) -> Result<naga::Module, String> {
    let module = naga::front::wgsl::parse_str(source).map_err(|e| e.emit_to_string(source))?;
    Validator::new(ValidationFlags::all(), Capabilities::all())
        .validate(&module)
        .map_err(|e| e.emit_to_string(source))?;
    Ok(module)
}

#[test]
fn embedded_cloud_shader_is_valid() {
    let module = validate(cumulus::SHADER_SOURCE).expect("embedded shader must validate");

    let mut stages: Vec<_> = module
        .entry_points
        .iter()
        .map(|ep| (ep.name.as_str(), ep.stage))
        .collect();
    stages.sort_by(|a, b| a.0.cmp(b.0));
    assert_eq!(
        stages,
        vec![
            ("fs", naga::ShaderStage::Fragment),
            ("vs", naga::ShaderStage::Vertex),
        ]
    );
}

#[test]
fn embedded_shader_declares_the_drift_uniform() {
    let module = validate(cumulus::SHADER_SOURCE).unwrap();

    let uniform_count = module
        .global_variables
        .iter()
        .filter(|(_, var)| var.space == naga::AddressSpace::Uniform)
        .count();
    assert_eq!(uniform_count, 1, "exactly one uniform binding expected");
    assert!(cumulus::SHADER_SOURCE.contains("cloud_shift"));
}

#[test]
fn shader_constants_match_cpu_reference() {
    // The CPU model in cumulus::noise mirrors the shader; if one of these
    // constants changes in the WGSL, the reference (and its recorded
    // baseline) must move with it.
    for needle in [
        "vec2f(1.0, 57.0)",
        "43758.5453",
        "smoothstep(0.3, 1.0, n)",
        "vec3f(0.602, 0.808, 0.980)",
        "vec3f(0.97)",
        "* 0.15",
        "* 0.05",
        "* 0.1",
    ] {
        assert!(
            cumulus::SHADER_SOURCE.contains(needle),
            "shader no longer contains `{needle}`"
        );
    }
}

#[test]
fn invalid_source_surfaces_a_nonempty_diagnostic() {
    let err = validate("this is not wgsl").expect_err("garbage must not compile");
    assert!(!err.is_empty());
}

#[test]
fn parseable_but_invalid_entry_point_fails_validation() {
    // Parses fine, but a vertex stage must produce a position.
    let source = r#"
        @vertex
        fn vs() -> @location(0) vec4f {
            return vec4f(0.0);
        }
    "#;
    let err = validate(source).expect_err("missing builtin position must fail");
    assert!(!err.is_empty());
}
