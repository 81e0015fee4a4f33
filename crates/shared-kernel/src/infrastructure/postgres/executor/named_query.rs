// crates/shared-kernel/src/infrastructure/postgres/executor/named_query.rs

/// Requête à paramètres nommés (`:name`) compilée en paramètres positionnels Postgres (`$n`).
///
/// Un même nom réutilise le même `$n`. Les casts `::type`, les littéraux `'...'`,
/// `$$...$$` / `$tag$...$tag$`, les identifiants `"..."` et les commentaires `--` / `/* */`
/// sont recopiés sans interprétation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedQuery {
    sql: String,
    parameters: Vec<String>,
}

impl NamedQuery {
    pub fn parse(source: &str) -> Self {
        let chars: Vec<char> = source.chars().collect();
        let mut sql = String::with_capacity(source.len());
        let mut parameters: Vec<String> = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            match (c, chars.get(i + 1).copied()) {
                ('\'' | '"', _) => {
                    let end = chars[i + 1..]
                        .iter()
                        .position(|&inner| inner == c)
                        .map_or(chars.len(), |p| i + 1 + p + 1);
                    sql.extend(&chars[i..end]);
                    i = end;
                }
                ('-', Some('-')) => {
                    let end = chars[i..]
                        .iter()
                        .position(|&inner| inner == '\n')
                        .map_or(chars.len(), |p| i + p);
                    sql.extend(&chars[i..end]);
                    i = end;
                }
                ('/', Some('*')) => {
                    let end = find(&chars, i + 2, &['*', '/']).map_or(chars.len(), |p| p + 2);
                    sql.extend(&chars[i..end]);
                    i = end;
                }
                ('$', _) => match dollar_tag_len(&chars, i) {
                    Some(len) => {
                        let end = find(&chars, i + len, &chars[i..i + len]).map_or(chars.len(), |p| p + len);
                        sql.extend(&chars[i..end]);
                        i = end;
                    }
                    None => {
                        sql.push('$');
                        i += 1;
                    }
                },
                (':', Some(':')) => {
                    sql.push_str("::");
                    i += 2;
                }
                (':', Some(next)) if next.is_ascii_alphabetic() || next == '_' => {
                    let end = chars[i + 1..]
                        .iter()
                        .position(|ch| !(ch.is_ascii_alphanumeric() || *ch == '_'))
                        .map_or(chars.len(), |p| i + 1 + p);
                    let name: String = chars[i + 1..end].iter().collect();
                    let index = match parameters.iter().position(|p| *p == name) {
                        Some(position) => position + 1,
                        None => {
                            parameters.push(name);
                            parameters.len()
                        }
                    };
                    sql.push_str(&format!("${index}"));
                    i = end;
                }
                _ => {
                    sql.push(c);
                    i += 1;
                }
            }
        }

        Self { sql, parameters }
    }

    /// SQL positionnel prêt pour `sqlx::query`
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Noms des paramètres, dans l'ordre de leur `$n`
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }
}

/// Longueur du délimiteur `$tag$` ouvrant en `start`, `None` si ce n'est pas un dollar-quote
/// (`$1`, identifiant contenant `$`...).
fn dollar_tag_len(chars: &[char], start: usize) -> Option<usize> {
    if start > 0 && (chars[start - 1].is_ascii_alphanumeric() || chars[start - 1] == '_') {
        return None;
    }
    let mut j = start + 1;
    if let Some(first) = chars.get(j) {
        if first.is_ascii_digit() {
            return None;
        }
    }
    while let Some(ch) = chars.get(j) {
        if *ch == '$' {
            return Some(j - start + 1);
        }
        if !(ch.is_ascii_alphanumeric() || *ch == '_') {
            return None;
        }
        j += 1;
    }
    None
}

fn find(chars: &[char], from: usize, needle: &[char]) -> Option<usize> {
    chars
        .get(from..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|p| from + p)
}
