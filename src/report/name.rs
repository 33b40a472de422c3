/// Substitutions applied to names before export. Every replacement is plain
/// ASCII, so folding an already folded name changes nothing.
static FOLDING: phf::Map<char, &'static str> = phf::phf_map! {
    'Ä' => "Ae", 'Ö' => "Oe", 'Ü' => "Ue",
    'ä' => "ae", 'ö' => "oe", 'ü' => "ue",
    'ß' => "ss", 'ẞ' => "SS",
    'Æ' => "AE", 'æ' => "ae", 'Œ' => "OE", 'œ' => "oe",
    'Ø' => "O", 'ø' => "o", 'Å' => "A", 'å' => "a",
    'À' => "A", 'Á' => "A", 'Â' => "A", 'Ã' => "A", 'Ą' => "A",
    'à' => "a", 'á' => "a", 'â' => "a", 'ã' => "a", 'ą' => "a",
    'Ç' => "C", 'Ć' => "C", 'Č' => "C",
    'ç' => "c", 'ć' => "c", 'č' => "c",
    'Ð' => "D", 'Đ' => "D", 'Ď' => "D",
    'ð' => "d", 'đ' => "d", 'ď' => "d",
    'È' => "E", 'É' => "E", 'Ê' => "E", 'Ë' => "E", 'Ę' => "E", 'Ě' => "E",
    'è' => "e", 'é' => "e", 'ê' => "e", 'ë' => "e", 'ę' => "e", 'ě' => "e",
    'Ğ' => "G", 'ğ' => "g",
    'Ì' => "I", 'Í' => "I", 'Î' => "I", 'Ï' => "I", 'İ' => "I",
    'ì' => "i", 'í' => "i", 'î' => "i", 'ï' => "i", 'ı' => "i",
    'Ł' => "L", 'ł' => "l",
    'Ñ' => "N", 'Ń' => "N", 'Ň' => "N",
    'ñ' => "n", 'ń' => "n", 'ň' => "n",
    'Ò' => "O", 'Ó' => "O", 'Ô' => "O", 'Õ' => "O", 'Ő' => "O",
    'ò' => "o", 'ó' => "o", 'ô' => "o", 'õ' => "o", 'ő' => "o",
    'Ř' => "R", 'ř' => "r",
    'Ś' => "S", 'Š' => "S", 'Ş' => "S",
    'ś' => "s", 'š' => "s", 'ş' => "s",
    'Ť' => "T", 'ť' => "t",
    'Þ' => "Th", 'þ' => "th",
    'Ù' => "U", 'Ú' => "U", 'Û' => "U", 'Ů' => "U", 'Ű' => "U",
    'ù' => "u", 'ú' => "u", 'û' => "u", 'ů' => "u", 'ű' => "u",
    'Ý' => "Y", 'Ÿ' => "Y", 'ý' => "y", 'ÿ' => "y",
    'Ź' => "Z", 'Ż' => "Z", 'Ž' => "Z",
    'ź' => "z", 'ż' => "z", 'ž' => "z",
};

/// Fold diacritics; characters without a mapping pass through
pub fn fold(name: &str) -> String {
    let mut folded = String::with_capacity(name.len());
    for ch in name.chars() {
        match FOLDING.get(&ch) {
            Some(replacement) => folded.push_str(replacement),
            None => folded.push(ch),
        }
    }
    folded
}

/// `Lastname,Firstname`, folded
pub fn format_name(last_name: &str, first_name: &str) -> String {
    let last_name = last_name.trim();
    let first_name = first_name.trim();

    if first_name.is_empty() {
        fold(last_name)
    } else {
        fold(&format!("{},{}", last_name, first_name))
    }
}
