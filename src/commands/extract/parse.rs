use super::*;

#[derive(Debug, Clone)]
struct TokenSlot {
    word: usize,
    lemma: Option<usize>,
    pos: Option<usize>,
    morph: Option<usize>,
    dep: Option<usize>,
}

#[derive(Debug, Clone)]
struct AnnotatedSchema {
    sentence: usize,
    slots: Vec<TokenSlot>,
}

impl AnnotatedSchema {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let column = |name: &str| headers.iter().position(|header| header == name);

        let sentence = column("sentence").context("missing `sentence` column")?;

        let mut slots = Vec::new();
        for i in 1.. {
            let Some(word) = column(&format!("word{i}")) else {
                break;
            };
            slots.push(TokenSlot {
                word,
                lemma: column(&format!("lemma{i}")),
                pos: column(&format!("pos{i}")),
                morph: column(&format!("morph{i}")),
                dep: column(&format!("dep{i}")),
            });
        }

        Ok(Self { sentence, slots })
    }
}

fn field(record: &csv::StringRecord, index: Option<usize>) -> &str {
    index
        .and_then(|index| record.get(index))
        .map(str::trim)
        .unwrap_or_default()
}

pub fn parse_annotated_csv(path: &Path) -> Result<Document> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    parse_annotated_reader(file).with_context(|| format!("failed to parse {}", path.display()))
}

pub fn parse_annotated_reader<R: Read>(reader: R) -> Result<Document> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers().context("failed to read header row")?.clone();
    let schema = AnnotatedSchema::from_headers(&headers)?;

    let mut document = DocumentBuilder::new();
    let mut groups: HashMap<String, usize> = HashMap::new();

    for (index, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("malformed row {}", index + 2))?;
        let text = record.get(schema.sentence).unwrap_or_default();

        let group = match groups.get(text) {
            Some(group) => *group,
            None => {
                let group = document.open_sentence(text);
                groups.insert(text.to_string(), group);
                group
            }
        };

        for slot in &schema.slots {
            let word = field(&record, Some(slot.word));
            if !Token::is_valid_word(word) {
                continue;
            }
            document.push_token(
                group,
                Token::new(
                    word,
                    field(&record, slot.lemma),
                    field(&record, slot.pos),
                    field(&record, slot.morph),
                    field(&record, slot.dep),
                ),
            );
        }
    }

    Ok(document.build())
}
