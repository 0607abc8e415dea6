//! Fruit Picker Example
//!
//! Drives a filterable combo box through a scripted session on the headless
//! host and prints what a user would see after each step:
//! - typing narrows the list
//! - arrow keys and Enter commit a row
//! - editing away from the selection clears it
//! - leaving the field discards unmatched free text
//!
//! Run with: cargo run -p filter-combo --example fruit_picker
//! Trace the state machine with: RUST_LOG=filter_combo=debug

use filter_combo::prelude::*;
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"
placeholder = "Pick a fruit"
max_dropdown_height = 96.0
display_member_path = "name"
"#;

fn catalogue() -> Vec<ComboItem<Value>> {
    vec![
        ComboItem::plain(json!({ "name": "Apple", "stock": 12 })),
        ComboItem::plain(json!({ "name": "Banana", "stock": 0 })),
        ComboItem::plain(json!({ "name": "Cherry", "stock": 40 })),
        ComboItem::plain(json!({ "name": "Peach", "stock": 7 })),
        ComboItem::Row(SelectableRow::new(json!({ "name": "Durian", "stock": 0 })).with_enabled(false)),
        ComboItem::plain(json!({ "name": "Mango", "stock": 3 })),
    ]
}

fn show(step: &str, combo: &FilterComboBox<Value>) {
    let visible: Vec<String> = combo
        .visible_items()
        .iter()
        .map(|item| combo.render_display(item))
        .collect();
    let text = if combo.is_placeholder_visible() {
        format!("<{}>", combo.placeholder())
    } else {
        combo.display_text()
    };
    println!(
        "{step:<28} text={text:<16} filter={:<8} selected={:<3} open={:<5} visible={visible:?}",
        format!("{:?}", combo.filter_text()),
        combo.selected_index(),
        combo.is_dropdown_open(),
    );
}

fn key(combo: &mut FilterComboBox<Value>, key: Key) {
    combo.event(&ComboEvent::KeyPress(KeyPressEvent::plain(key)));
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = FilterComboConfig::from_toml_str(CONFIG)?;
    let mut combo = FilterComboBox::from_config(config)?
        .with_filter_predicate(|item: &ComboItem<Value>, text: &str| {
            item.content()
                .get("name")
                .and_then(Value::as_str)
                .is_some_and(|name| name.to_lowercase().contains(&text.to_lowercase()))
        })
        .with_items_source(catalogue());

    combo.selection_changed.connect(|index| println!("  -> selection_changed({index})"));
    combo.items_filtered.connect(|count| println!("  -> items_filtered({count})"));

    combo.event(&ComboEvent::Attached);
    combo.event(&ComboEvent::TextFocusIn);
    show("attached", &combo);

    for text in ["a", "an", "ang"] {
        combo.event(&ComboEvent::TextChanged(text.into()));
        show(&format!("typed {text:?}"), &combo);
    }

    key(&mut combo, Key::ArrowDown);
    key(&mut combo, Key::Enter);
    show("ArrowDown + Enter", &combo);

    combo.event(&ComboEvent::TextChanged("Mang".into()));
    show("edited to \"Mang\"", &combo);

    key(&mut combo, Key::Escape);
    combo.event(&ComboEvent::TextFocusOut);
    show("Escape + focus out", &combo);

    key(&mut combo, Key::F4);
    let row = combo.host().row_center(3).map(|pos| {
        combo.event(&ComboEvent::MousePress(MousePressEvent::new(MouseButton::Left, pos)));
        combo.event(&ComboEvent::MouseRelease(MouseReleaseEvent::new(MouseButton::Left, pos)))
    });
    show(&format!("clicked row 3 ({row:?})"), &combo);

    combo.clear();
    show("clear()", &combo);

    Ok(())
}
