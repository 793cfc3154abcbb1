pub struct Nowiki;

impl Nowiki {
    /// Opens and closes a raw span; `{{%%}}` writes it literally.
    pub const DELIMITER: &'static str = "%%";
}
