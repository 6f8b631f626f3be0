//! Builds a small scene and prints the exported HTML document.
//!
//! Run with `cargo run --example export_demo`.

use canvasforge_core::widget::WidgetPatch;
use canvasforge_core::{Scene, WidgetType};
use canvasforge_export::{ExportOptions, generate, suggested_filename};
use kurbo::Point;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut scene = Scene::new();
    scene.project_name = "Demo Landing Page".to_string();

    let heading = scene.add_widget(WidgetType::Text, Point::new(100.0, 60.0));
    let fields = serde_json::from_str(
        r#"{"content": "Welcome to CanvasForge", "fontSize": 32, "fontWeight": "bold"}"#,
    )?;
    scene.update_widget(heading, &WidgetPatch::props(fields))?;

    let email = scene.add_widget(WidgetType::Input, Point::new(100.0, 140.0));
    let fields = serde_json::from_str(
        r#"{"label": "Email", "placeholder": "you@example.com", "inputType": "email", "required": true}"#,
    )?;
    scene.update_widget(email, &WidgetPatch::props(fields))?;

    let submit = scene.add_widget(WidgetType::Button, Point::new(100.0, 240.0));
    let fields = serde_json::from_str(r#"{"text": "Sign up"}"#)?;
    scene.update_widget(submit, &WidgetPatch::props(fields))?;

    let html = generate(&scene, &ExportOptions::default())?;
    eprintln!("suggested filename: {}", suggested_filename(&scene.project_name));
    println!("{}", html);
    Ok(())
}
