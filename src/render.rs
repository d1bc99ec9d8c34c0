use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::view::{DisplayRegion, ViewState};

pub const TITLE: &str = "Cocktail Recipe Finder";
pub const LOADING_PLACEHOLDER: &str = "Loading cocktail...";
pub const SEARCH_PLACEHOLDER: &str = "Enter cocktail name";
pub const RANDOM_BUTTON_LABEL: &str = "Get Random Cocktail";

/// Render the view for a terminal
pub fn render_text(state: &ViewState) -> String {
    let mut out = String::new();

    match state.display() {
        DisplayRegion::Error(message) => {
            let _ = writeln!(out, "Error: {}", message);
        }
        DisplayRegion::Recipe(recipe) => {
            let _ = writeln!(out, "{}", recipe.name);
            let _ = writeln!(out, "{}", "=".repeat(recipe.name.chars().count()));
            if !recipe.image.is_empty() {
                let _ = writeln!(out, "Image: {}", recipe.image);
            }
            let _ = writeln!(out, "\nIngredients:");
            for ingredient in &recipe.ingredients {
                let _ = writeln!(out, "  - {}", ingredient);
            }
            let _ = writeln!(out, "\nInstructions:");
            let _ = writeln!(out, "{}", recipe.instructions);
        }
        DisplayRegion::Loading => {
            let _ = writeln!(out, "{}", LOADING_PLACEHOLDER);
        }
    }

    let _ = writeln!(out, "\n[/random] {}", RANDOM_BUTTON_LABEL);
    out
}

/// Render the view as an HTML fragment
pub fn render_html(state: &ViewState) -> String {
    let mut out = String::new();

    out.push_str("<div class=\"App\">\n<header class=\"App-header\">\n");
    let _ = writeln!(out, "<h1>{}</h1>", TITLE);
    out.push_str("<form>\n");
    let _ = writeln!(
        out,
        "<input type=\"text\" placeholder=\"{}\" value=\"{}\" class=\"cocktail-input\">",
        SEARCH_PLACEHOLDER,
        encode_double_quoted_attribute(state.search_text())
    );
    out.push_str("<button type=\"submit\" class=\"search-button\">Search</button>\n</form>\n");

    match state.display() {
        DisplayRegion::Error(message) => {
            let _ = writeln!(out, "<p class=\"error\">{}</p>", encode_text(message));
        }
        DisplayRegion::Recipe(recipe) => {
            out.push_str("<div class=\"cocktail-info\">\n");
            let _ = writeln!(out, "<h2>{}</h2>", encode_text(&recipe.name));
            let _ = writeln!(
                out,
                "<img src=\"{}\" alt=\"{}\" class=\"cocktail-image\">",
                encode_double_quoted_attribute(&recipe.image),
                encode_double_quoted_attribute(&recipe.name)
            );
            out.push_str("<h3>Ingredients:</h3>\n<ul>\n");
            for ingredient in &recipe.ingredients {
                let _ = writeln!(out, "<li>{}</li>", encode_text(ingredient));
            }
            out.push_str("</ul>\n<h3>Instructions:</h3>\n");
            let _ = writeln!(out, "<p>{}</p>", encode_text(&recipe.instructions));
            out.push_str("</div>\n");
        }
        DisplayRegion::Loading => {
            let _ = writeln!(out, "<p>{}</p>", LOADING_PLACEHOLDER);
        }
    }

    let _ = writeln!(
        out,
        "<button class=\"random-button\">{}</button>",
        RANDOM_BUTTON_LABEL
    );
    out.push_str("</header>\n</div>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Recipe;

    fn negroni() -> Recipe {
        Recipe {
            name: "Negroni".to_string(),
            instructions: "Stir into glass over ice.".to_string(),
            ingredients: vec![
                "Gin - 1 oz".to_string(),
                "Campari - 1 oz".to_string(),
                "Sweet Vermouth - 1 oz".to_string(),
            ],
            image: "https://example.com/negroni.jpg".to_string(),
        }
    }

    #[test]
    fn test_text_loading() {
        let text = render_text(&ViewState::new());
        assert!(text.starts_with(LOADING_PLACEHOLDER));
        assert!(text.contains(RANDOM_BUTTON_LABEL));
    }

    #[test]
    fn test_text_recipe() {
        let mut state = ViewState::new();
        state.succeed(negroni());

        let text = render_text(&state);
        assert!(text.starts_with("Negroni\n=======\n"));
        assert!(text.contains("Image: https://example.com/negroni.jpg"));
        assert!(text.contains("  - Campari - 1 oz\n"));
        assert!(text.contains("Instructions:\nStir into glass over ice."));
        assert!(!text.contains(LOADING_PLACEHOLDER));
    }

    #[test]
    fn test_text_error() {
        let mut state = ViewState::new();
        state.fail("Cocktail not found.");

        let text = render_text(&state);
        assert!(text.starts_with("Error: Cocktail not found."));
        assert!(!text.contains(LOADING_PLACEHOLDER));
    }

    #[test]
    fn test_html_escapes_text() {
        let mut state = ViewState::new();
        state.set_search_text("\"><script>");
        state.succeed(Recipe {
            name: "Rum & <Coke>".to_string(),
            ..negroni()
        });

        let html = render_html(&state);
        assert!(html.contains("<h2>Rum &amp; &lt;Coke&gt;</h2>"));
        assert!(html.contains("value=\"&quot;"));
        assert!(!html.contains("value=\"\">"));
    }
}
