use coverpick::tooling::cli::{Commands, OverrideCommands};
use coverpick::ApiError;
use serde_json::Value;
use std::fs;

use crate::integration::support::Workspace;

fn marina() -> Workspace {
    Workspace::new(&[
        (
            "Marina Tower",
            &["site.jpg", "02-lobby.jpg", "electrical-panel.jpg", "notes.txt"],
        ),
        ("Harbour View", &["IMG_2931.jpg", "facade-top.jpg"]),
        ("Empty Lot", &[]),
    ])
}

fn json(output: &str) -> Value {
    serde_json::from_str(output).unwrap()
}

#[test]
fn projects_json_lists_every_project() {
    let ws = marina();
    let out = ws
        .context()
        .execute(&Commands::Projects {
            format: "json".to_string(),
        })
        .unwrap();
    let records = json(&out);
    let names: Vec<&str> = records
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Empty Lot", "Harbour View", "Marina Tower"]);

    let marina = &records[2];
    assert_eq!(marina["photos"].as_array().unwrap().len(), 3);
    assert_eq!(marina["photos"][0]["rawName"], "02-lobby.jpg");
    assert_eq!(marina["coverPosition"], "center");
    assert_eq!(marina["coverFit"], "cover");
}

#[test]
fn project_table_forces_position_only() {
    let ws = marina();
    let out = ws
        .context()
        .execute(&Commands::Resolve {
            project: "Harbour View".to_string(),
            format: "json".to_string(),
        })
        .unwrap();
    let resolution = json(&out);
    assert_eq!(resolution["coverId"], "Harbour View/facade-top.jpg");
    // filename says top, the project table says bottom
    assert_eq!(resolution["focalPosition"], "bottom");
    assert_eq!(resolution["positionSource"], "project_table");
}

#[test]
fn ai_analysis_is_matched_by_lowercased_folder() {
    let ws = marina();
    ws.write_analysis(r#"{"marina tower": {"bestCoverId": "Marina Tower/site.jpg"}}"#);
    let resolution = ws.context().catalog().resolve_project("Marina Tower").unwrap();
    assert_eq!(resolution.cover_id.as_deref(), Some("Marina Tower/site.jpg"));
}

#[test]
fn corrupt_stores_degrade_to_heuristic() {
    let ws = marina();
    ws.write_analysis("{broken");
    ws.write_overrides("[1, 2, 3]");
    let resolution = ws.context().catalog().resolve_project("Marina Tower").unwrap();
    assert_eq!(
        resolution.cover_id.as_deref(),
        Some("Marina Tower/02-lobby.jpg")
    );
}

#[test]
fn override_lifecycle() {
    let ws = marina();
    let ctx = ws.context();

    let out = ctx
        .execute(&Commands::Override {
            command: OverrideCommands::Set {
                project: "Marina Tower".to_string(),
                photo: Some("electrical-panel.jpg".to_string()),
                position: Some(coverpick::FocalPosition::Top),
                fit: None,
            },
        })
        .unwrap();
    assert!(out.contains("Marina Tower/electrical-panel.jpg"));

    let stored = fs::read_to_string(ws.root().join("data").join("overrides.json")).unwrap();
    let stored = json(&stored);
    assert_eq!(
        stored["Marina Tower"]["coverPhotoId"],
        "Marina Tower/electrical-panel.jpg"
    );
    assert_eq!(stored["Marina Tower"]["coverPosition"], "top");

    let record = ctx.catalog().project_record("Marina Tower").unwrap();
    assert_eq!(record.photos[0].raw_name, "electrical-panel.jpg");
    assert_eq!(record.cover_position, coverpick::FocalPosition::Top);

    let out = ctx
        .execute(&Commands::Override {
            command: OverrideCommands::Clear {
                project: "Marina Tower".to_string(),
            },
        })
        .unwrap();
    assert!(out.starts_with("Cleared"));

    let out = ctx
        .execute(&Commands::Override {
            command: OverrideCommands::Show {
                project: "Marina Tower".to_string(),
                format: "json".to_string(),
            },
        })
        .unwrap();
    assert_eq!(out.trim(), "null");
}

#[test]
fn override_set_rejects_foreign_photo() {
    let ws = marina();
    let err = ws
        .context()
        .execute(&Commands::Override {
            command: OverrideCommands::Set {
                project: "Marina Tower".to_string(),
                photo: Some("Harbour View/facade-top.jpg".to_string()),
                position: None,
                fit: None,
            },
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::PhotoNotFound { .. }));
}

#[test]
fn export_skips_empty_projects_unless_asked() {
    let ws = marina();
    let ctx = ws.context();

    let out = ctx
        .execute(&Commands::Export {
            output: None,
            include_empty: false,
        })
        .unwrap();
    let export = json(&out);
    assert!(export["generatedAt"].is_string());
    assert_eq!(export["projects"].as_array().unwrap().len(), 2);

    let out = ctx
        .execute(&Commands::Export {
            output: Some("out/projects.json".into()),
            include_empty: true,
        })
        .unwrap();
    assert!(out.starts_with("Exported 3 project(s)"));
    let written = fs::read_to_string(ws.root().join("out").join("projects.json")).unwrap();
    assert_eq!(json(&written)["projects"].as_array().unwrap().len(), 3);
}

#[test]
fn explain_text_marks_the_winner() {
    let ws = marina();
    let out = ws
        .context()
        .execute(&Commands::Explain {
            project: "Marina Tower".to_string(),
            format: "text".to_string(),
        })
        .unwrap();
    assert!(out.contains("mild_preferred:lobby (+8)"));
    assert!(out.contains("avoid:electrical (-30)"));
}

#[test]
fn unknown_project_and_bad_format_are_errors() {
    let ws = marina();
    let ctx = ws.context();
    assert!(matches!(
        ctx.execute(&Commands::Resolve {
            project: "Nowhere".to_string(),
            format: "text".to_string(),
        }),
        Err(ApiError::ProjectNotFound(_))
    ));
    assert!(matches!(
        ctx.execute(&Commands::Projects {
            format: "xml".to_string(),
        }),
        Err(ApiError::InvalidArgument(_))
    ));
}

#[test]
fn config_command_prints_effective_toml() {
    let ws = marina();
    let out = ws.context().execute(&Commands::Config).unwrap();
    let parsed: coverpick::config::CoverpickConfig = toml::from_str(&out).unwrap();
    assert_eq!(parsed.library.root, std::path::PathBuf::from("projects"));
    assert_eq!(parsed.focal_overrides.len(), 1);
    assert_eq!(parsed.focal_overrides[0].contains, "harbour");
}
