use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Language {
    French,
    English,
}

pub fn get_text(key: &str, language: Language) -> String {
    match language {
        Language::French => get_french_text(key),
        Language::English => get_english_text(key),
    }
}

fn get_french_text(key: &str) -> String {
    let translations: HashMap<&str, &str> = [
        // Menu principal
        ("language", "Langue"),
        ("sprite_dimensions", "Dimensions du sprite"),
        ("width", "Largeur:"),
        ("height", "Hauteur:"),
        ("create_sprite", "Créer un sprite"),

        // Panneaux
        ("preview", "Aperçu"),
        ("frames", "Images"),
        ("add_frame", "Ajouter une image"),
        ("palette", "Palette"),
        ("pen_color", "Couleur du stylo"),
        ("sampled", "échantillonnée"),
        ("add_color", "Ajouter une couleur"),

        // Interactions
        ("pointer_help", "Clic gauche: dessiner | Clic droit: pipette"),

        // Export
        ("export", "Exporter"),
        ("export_scale", "Échelle d'export:"),
        ("export_image", "Exporter l'image"),

        // Boutons d'action
        ("return_to_menu", "Retour au menu"),

        // Dialogues
        ("error", "Erreur"),
        ("ok", "OK"),

        // Erreurs
        ("export_failed", "Impossible d'exporter l'image"),
    ]
    .iter()
    .cloned()
    .collect();

    translations.get(key).unwrap_or(&key).to_string()
}

fn get_english_text(key: &str) -> String {
    let translations: HashMap<&str, &str> = [
        // Main menu
        ("language", "Language"),
        ("sprite_dimensions", "Sprite Dimensions"),
        ("width", "Width:"),
        ("height", "Height:"),
        ("create_sprite", "Create Sprite"),

        // Panels
        ("preview", "Preview"),
        ("frames", "Frames"),
        ("add_frame", "Add Frame"),
        ("palette", "Palette"),
        ("pen_color", "Pen Color"),
        ("sampled", "sampled"),
        ("add_color", "Add Color"),

        // Interactions
        ("pointer_help", "Left click: draw | Right click: eyedropper"),

        // Export
        ("export", "Export"),
        ("export_scale", "Export Scale:"),
        ("export_image", "Export Image"),

        // Action buttons
        ("return_to_menu", "Return to Menu"),

        // Dialogs
        ("error", "Error"),
        ("ok", "OK"),

        // Errors
        ("export_failed", "Unable to export image"),
    ]
    .iter()
    .cloned()
    .collect();

    translations.get(key).unwrap_or(&key).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_fall_back_to_the_key() {
        assert_eq!(get_text("no_such_key", Language::English), "no_such_key");
    }

    #[test]
    fn both_languages_cover_the_same_keys() {
        for key in ["language", "create_sprite", "add_frame", "export_image", "error"] {
            assert_ne!(get_text(key, Language::English), key);
            assert_ne!(get_text(key, Language::French), key);
        }
    }
}
