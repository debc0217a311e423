use crate::shared::format::strip_diacritics;
use once_cell::sync::Lazy;
use regex::Regex;

/// Типы улиц и их сокращения; срезаются только в начале адреса
const STREET_TYPE_PREFIXES: &[&str] = &[
    "calle", "c", "cl", "avenida", "avda", "av", "plaza", "pza", "pl", "paseo", "pso", "po",
    "camino", "cno", "carretera", "ctra", "ronda", "rda", "travesia", "trva", "glorieta", "gta",
    "carrer", "passeig", "rambla", "via", "rua",
]; // испанские и каталанские формы

/// Отдельно стоящие предлоги и артикли
const PREPOSITIONS: &[&str] = &[
    "de", "del", "dels", "la", "las", "los", "el", "les", "en", "al", "y", "i", "d", "l",
];

/// Города и районы рабочих рынков, отбрасываемые в хвосте адреса.
/// Список ограничен и загружается один раз как неизменяемые данные.
const CITY_DISTRICT_NAMES: &[&str] = &[
    // города
    "madrid",
    "barcelona",
    "valencia",
    "sevilla",
    "zaragoza",
    "malaga",
    "bilbao",
    "alcobendas",
    "las rozas",
    "getafe",
    "hospitalet",
    "badalona",
    "sant cugat",
    // районы Мадрида
    "centro",
    "arganzuela",
    "retiro",
    "salamanca",
    "chamartin",
    "tetuan",
    "chamberi",
    "moncloa",
    "latina",
    "carabanchel",
    "usera",
    "vallecas",
    "hortaleza",
    // районы Барселоны
    "eixample",
    "gracia",
    "sants",
    "montjuic",
    "sarria",
    "sant gervasi",
    "horta",
    "guinardo",
    "nou barris",
    "sant marti",
    "ciutat vella",
    "poblenou",
    // страна в хвосте полного адреса
    "espana",
    "spain",
];

/// Номер дома: группа цифр, опционально с квалификатором этажа/помещения
/// и вторичной цифрой. Чисто пятизначные группы не захватываются - это
/// почтовые индексы.
static STREET_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(\d{1,4})\b(?:[\s,]*(?:piso|planta|local|puerta|portal|escalera|esc|bajo|nave|oficina)\.?\s*\d{0,3}\b)?",
    )
    .expect("street number pattern is valid")
});

/// Именованное правило нормализации адреса
///
/// Конвейер - это данные, а не поток управления: каждое правило
/// проверяется в изоляции, порядок читается по списку.
pub struct NormalizeRule {
    pub name: &'static str,
    pub apply: fn(&str) -> String,
}

/// Упорядоченный конвейер нормализации (без шага восстановления номера,
/// который выполняется поверх конвейера в [`normalize_address`])
pub static NORMALIZE_RULES: &[NormalizeRule] = &[
    NormalizeRule {
        name: "truncate_at_comma",
        apply: truncate_at_comma,
    },
    NormalizeRule {
        name: "strip_trailing_city_district",
        apply: strip_trailing_city_district,
    },
    NormalizeRule {
        name: "strip_trailing_postal_code",
        apply: strip_trailing_postal_code,
    },
    NormalizeRule {
        name: "lowercase",
        apply: lowercase,
    },
    NormalizeRule {
        name: "strip_diacritic_marks",
        apply: strip_diacritic_marks,
    },
    NormalizeRule {
        name: "strip_street_type_prefix",
        apply: strip_street_type_prefix,
    },
    NormalizeRule {
        name: "strip_prepositions",
        apply: strip_prepositions,
    },
    NormalizeRule {
        name: "collapse_punctuation",
        apply: collapse_punctuation,
    },
];

/// Ключ сравнения из произвольного текстового адреса
///
/// Детерминированная тотальная функция: пустой или искажённый вход даёт
/// пустой либо вырожденный ключ, но никогда не ошибку. Номер дома ищется
/// в полном входе до усечения; если конвейер его потерял (номер стоял
/// после запятой или ушёл вместе с названием района), он дописывается
/// в конец ключа.
pub fn normalize_address(raw: &str) -> String {
    let street_number = find_street_number(raw);

    let mut text = raw.trim().to_string();
    for rule in NORMALIZE_RULES {
        text = (rule.apply)(&text);
    }

    if let Some(number) = street_number {
        let present = text.split_whitespace().any(|token| token == number);
        if !present {
            if text.is_empty() {
                text = number;
            } else {
                text = format!("{} {}", text, number);
            }
        }
    }

    text
}

/// Первый похожий на номер дома токен полного адреса
fn find_street_number(raw: &str) -> Option<String> {
    STREET_NUMBER_RE
        .captures(raw)
        .map(|captures| captures[1].to_string())
}

fn truncate_at_comma(input: &str) -> String {
    input.split(',').next().unwrap_or("").trim().to_string()
}

fn strip_trailing_city_district(input: &str) -> String {
    let mut tokens: Vec<&str> = input.split_whitespace().collect();

    loop {
        let mut stripped = false;
        // двухсловные названия проверяются раньше однословных
        for take in (1..=2).rev() {
            if tokens.len() < take {
                continue;
            }
            let tail = tokens[tokens.len() - take..].join(" ");
            if CITY_DISTRICT_NAMES.contains(&fold_for_lookup(&tail).as_str()) {
                tokens.truncate(tokens.len() - take);
                stripped = true;
                break;
            }
        }
        if !stripped {
            break;
        }
    }

    tokens.join(" ")
}

fn strip_trailing_postal_code(input: &str) -> String {
    let mut tokens: Vec<&str> = input.split_whitespace().collect();

    while let Some(last) = tokens.last() {
        let is_postal = last.len() == 5 && last.chars().all(|c| c.is_ascii_digit());
        if !is_postal {
            break;
        }
        tokens.pop();
    }

    tokens.join(" ")
}

fn lowercase(input: &str) -> String {
    input.to_lowercase()
}

fn strip_diacritic_marks(input: &str) -> String {
    strip_diacritics(input)
}

fn strip_street_type_prefix(input: &str) -> String {
    let mut tokens: Vec<String> = input.split_whitespace().map(str::to_string).collect();

    loop {
        let Some(first) = tokens.first().cloned() else {
            break;
        };

        // склеенная форма "c/mozart"
        if let Some((head, rest)) = first.split_once('/') {
            let head = head.trim_end_matches('.');
            if !head.is_empty() && STREET_TYPE_PREFIXES.contains(&head) {
                tokens.remove(0);
                if !rest.is_empty() {
                    tokens.insert(0, rest.to_string());
                }
                continue;
            }
        }

        let bare = first.trim_end_matches(['.', '/']);
        if !bare.is_empty() && STREET_TYPE_PREFIXES.contains(&bare) {
            tokens.remove(0);
            continue;
        }

        break;
    }

    tokens.join(" ")
}

fn strip_prepositions(input: &str) -> String {
    input
        .split_whitespace()
        .filter(|token| !PREPOSITIONS.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

fn collapse_punctuation(input: &str) -> String {
    let replaced: String = input
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn fold_for_lookup(token: &str) -> String {
    strip_diacritics(&token.to_lowercase())
}
