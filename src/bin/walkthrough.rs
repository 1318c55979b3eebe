//! Scripted interaction demo for the pagemark core.
//!
//! Drives the annotation state machine through a typical review session
//! from a fake event stream: report a layout, place a note and a
//! rectangle, resize and drag them, edit a comment, and print the sidebar
//! listing. Run with `RUST_LOG=debug` to watch the store's log output.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use pagemark::{
        AnnotatorApp, Message, PageLayout, Point, RendererMessage, ResizeDirection,
        SidebarMessage, SurfaceMessage, ToolbarMessage,
    };
    use pagemark::model::AnnotationTool;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let mut app = AnnotatorApp::new();

    // The renderer mounts and reports a three-page A4 document.
    app.update(Message::Renderer(RendererMessage::LayoutReported(
        PageLayout::new(595.0, 842.0, 3),
    )));

    // Drop a note on page 1.
    app.update(Message::Toolbar(ToolbarMessage::SetTool(
        AnnotationTool::Note,
    )));
    app.update(Message::Surface(SurfaceMessage::Clicked(Point::new(
        120.0, 140.0,
    ))));

    // Draw a rectangle on page 2 and widen it by 40px.
    app.update(Message::Toolbar(ToolbarMessage::SetTool(
        AnnotationTool::Rectangle,
    )));
    app.update(Message::Surface(SurfaceMessage::Clicked(Point::new(
        60.0, 950.0,
    ))));
    let Some(rect_id) = app.store().annotations().last().map(|a| a.id) else {
        eprintln!("rectangle placement failed");
        return;
    };

    app.update(Message::Toolbar(ToolbarMessage::SetTool(
        AnnotationTool::Select,
    )));
    app.update(Message::Surface(SurfaceMessage::AnnotationClicked(rect_id)));
    app.update(Message::Surface(SurfaceMessage::ResizeStarted {
        id: rect_id,
        direction: ResizeDirection::Right,
        pointer: Point::new(210.0, 1000.0),
    }));
    app.update(Message::Surface(SurfaceMessage::PointerMoved(Point::new(
        250.0, 1000.0,
    ))));
    app.update(Message::Surface(SurfaceMessage::PointerReleased(
        Point::new(250.0, 1000.0),
    )));

    // Nudge the rectangle 25px down-right.
    app.update(Message::Surface(SurfaceMessage::DragStarted {
        id: rect_id,
        pointer: Point::new(100.0, 980.0),
    }));
    app.update(Message::Surface(SurfaceMessage::PointerMoved(Point::new(
        125.0, 1005.0,
    ))));
    app.update(Message::Surface(SurfaceMessage::PointerReleased(
        Point::new(125.0, 1005.0),
    )));

    // Leave a comment on the note from the sidebar.
    if let Some(note) = app.store().annotations().first() {
        let note_id = note.id;
        app.update(Message::Sidebar(SidebarMessage::EditContent(
            note_id,
            "Check this paragraph against the style guide".to_string(),
        )));
    }

    println!("\nSidebar (newest first):");
    for ann in app.store().sorted_for_display() {
        let shape = match ann.rect() {
            Some(rect) => format!("rectangle {:.0}x{:.0}", rect.width, rect.height),
            None => "note".to_string(),
        };
        println!(
            "  #{} p{} {} at ({:.0}, {:.0}) [{}] - {}",
            ann.id,
            ann.page_number,
            shape,
            ann.position.x,
            ann.position.y,
            ann.color.name(),
            ann.content
        );
    }
}

// WASM builds embed the library directly; the demo binary is native-only.
#[cfg(target_arch = "wasm32")]
fn main() {}
