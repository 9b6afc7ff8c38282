//! Lexical pattern library.
//!
//! Static, compile-once regex tables for EN and ES. Each supported language
//! owns a complete `LanguagePatterns` set; the scoring-level keyword sets and
//! the urgency ladder are shared bilingual tables so the scorer and the
//! metadata extractor stay language-agnostic.

use regex::Regex;
use std::sync::LazyLock;

use super::result::Language;

/// A regex that remembers the canonical label it reports when it matches
pub struct LabeledPattern {
    pub label: &'static str,
    pub regex: Regex,
}

/// Complete per-language pattern set used by the feature extractor
pub struct LanguagePatterns {
    /// Bare verbs that open an imperative sentence
    pub imperative_verbs: &'static [&'static str],
    /// Leading tokens skipped before looking for the imperative verb
    pub filler_tokens: &'static [&'static str],
    /// A sentence led by one of these has a stated subject, so it is never imperative
    pub subject_pronouns: &'static [&'static str],
    /// Whole-sentence imperative constructions ("please ...", "don't forget ...")
    pub imperative_constructions: Vec<Regex>,
    pub modals: Vec<Regex>,
    pub action_verbs: Vec<LabeledPattern>,
    /// Obligation cues recorded as action words after the verbs
    pub obligation_cues: Vec<LabeledPattern>,
    pub question_words: Vec<Regex>,
    pub thought_patterns: Vec<Regex>,
    /// Ordered desire/intent alternatives; any match sets the flag
    pub intent_patterns: Vec<LabeledPattern>,
    pub date_patterns: Vec<Regex>,
    pub time_patterns: Vec<Regex>,
}

impl LanguagePatterns {
    /// Pattern set for a supported language
    pub fn for_language(language: Language) -> &'static LanguagePatterns {
        match language {
            Language::English => &ENGLISH,
            Language::Spanish => &SPANISH,
        }
    }
}

// NOTE: panicking is acceptable here, the tables are static and a bad pattern is a build defect
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid regex: static pattern table")
}

fn labeled(label: &'static str, alternation: &str) -> LabeledPattern {
    LabeledPattern {
        label,
        regex: compile(&format!(r"(?i)\b(?:{})\b", alternation)),
    }
}

fn words(list: &[&'static str]) -> Vec<LabeledPattern> {
    list.iter()
        .map(|&word| labeled(word, &regex::escape(word)))
        .collect()
}

const EN_ACTION_VERBS: &[&str] = &[
    "buy", "call", "send", "fix", "schedule", "book", "pay", "email", "text", "write", "finish",
    "submit", "clean", "pick up", "check", "order", "cancel", "renew", "return", "prepare",
    "review", "update", "organize", "build", "contact", "reply", "file",
];

const EN_IMPERATIVE_VERBS: &[&str] = &[
    "buy", "call", "send", "fix", "schedule", "book", "pay", "email", "text", "write", "finish",
    "submit", "clean", "pick", "check", "order", "cancel", "renew", "return", "prepare", "review",
    "update", "organize", "build", "contact", "reply", "file", "go", "get", "remember", "remind",
    "take", "bring", "ask", "tell", "make", "visit", "read", "do", "don't", "dont", "don’t",
];

const ES_IMPERATIVE_VERBS: &[&str] = &[
    "compra", "comprar", "llama", "llamar", "envía", "envia", "enviar", "manda", "mandar",
    "arregla", "arreglar", "programa", "programar", "agenda", "agendar", "reserva", "reservar",
    "paga", "pagar", "escribe", "escribir", "termina", "terminar", "limpia", "limpiar", "recoge",
    "recoger", "revisa", "revisar", "pide", "pedir", "cancela", "cancelar", "renueva", "renovar",
    "devuelve", "devolver", "prepara", "preparar", "actualiza", "actualizar", "organiza",
    "organizar", "construye", "construir", "contacta", "contactar", "responde", "responder", "ve",
    "recuerda", "haz", "hacer", "trae", "traer", "lleva", "llevar", "pregunta", "visita", "visitar",
    "lee", "leer",
];

/// "3:30 pm", "7am", "18:45" in one pass so a clock time is never split
const CLOCK_TIME: &str = r"(?i)\b\d{1,2}(?::\d{2})?\s?(?:am|pm)\b|\b\d{1,2}:\d{2}\b";

static ENGLISH: LazyLock<LanguagePatterns> = LazyLock::new(|| LanguagePatterns {
    imperative_verbs: EN_IMPERATIVE_VERBS,
    filler_tokens: &["please", "pls", "just", "ok", "okay", "so", "and", "then", "also", "oh"],
    subject_pronouns: &["i", "you", "he", "she", "we", "they", "it"],
    imperative_constructions: vec![
        compile(r"(?i)^\s*(?:please|pls|kindly)\s+\w+"),
        compile(r"(?i)^\s*(?:don['’]?t|do not)\s+forget\b"),
        compile(r"(?i)^\s*let['’]?s\s+\w+"),
        compile(r"(?i)^\s*remember\s+to\b"),
    ],
    modals: vec![
        compile(r"(?i)\b(?:must|should|shall|ought to)\b"),
        compile(r"(?i)\b(?:need|needs|have|has|got) to\b"),
        compile(r"(?i)\bgotta\b"),
    ],
    action_verbs: words(EN_ACTION_VERBS),
    obligation_cues: vec![
        labeled("need to", r"needs? to"),
        labeled("have to", r"(?:have|has) to"),
        labeled("must", r"must"),
        labeled("remember to", r"remember to"),
        labeled("don't forget", r"don['’]?t forget|do not forget"),
    ],
    question_words: vec![compile(
        r"(?i)\b(?:what|why|how|when|where|who|whom|whose|which)\b",
    )],
    thought_patterns: vec![
        compile(r"(?i)\bwhat if\b"),
        compile(r"(?i)\bi wonder\b"),
        compile(r"(?i)\bit would be (?:interesting|nice|cool|fun|great)\b"),
        compile(r"(?i)\bi (?:think|feel|believe|guess)\b"),
        compile(r"(?i)\bi (?:just )?(?:realized|realised|noticed)\b"),
        compile(r"(?i)\bi['’]?ve been thinking\b"),
        compile(r"(?i)\b(?:just a thought|reminds me|imagine if)\b"),
    ],
    intent_patterns: vec![
        labeled("i want to", r"i want to|i wanna"),
        labeled("i'd like to", r"i['’]d like to|i would like to"),
        labeled("i'm thinking about", r"i['’]m thinking (?:about|of)|i am thinking (?:about|of)"),
        labeled("i'd love to", r"i['’]d love to|i would love to"),
        labeled("i wish", r"i wish"),
        labeled("i hope to", r"i hope to"),
        labeled("i dream of", r"i dream (?:of|about)"),
        labeled("i'm interested in", r"i['’]m interested in|i am interested in"),
    ],
    date_patterns: vec![
        compile(r"(?i)\b(?:today|tomorrow|yesterday)\b"),
        compile(r"(?i)\b(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b"),
        compile(
            r"(?i)\b(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?\s+\d{1,2}(?:st|nd|rd|th)?\b",
        ),
        compile(r"\b\d{1,2}[/-]\d{1,2}(?:[/-]\d{2,4})?\b"),
        compile(r"(?i)\b(?:next|this)\s+(?:week|weekend|month|year)\b"),
    ],
    time_patterns: vec![
        compile(CLOCK_TIME),
        compile(r"(?i)\b(?:morning|afternoon|evening|tonight|noon|midnight)\b"),
        compile(r"(?i)\bat\s+\d{1,2}\b"),
    ],
});

static SPANISH: LazyLock<LanguagePatterns> = LazyLock::new(|| LanguagePatterns {
    imperative_verbs: ES_IMPERATIVE_VERBS,
    filler_tokens: &["por", "favor", "porfa", "ok", "vale", "bueno", "y", "luego", "también", "solo"],
    subject_pronouns: &[
        "yo", "tú", "tu", "él", "ella", "usted", "nosotros", "nosotras", "vosotros", "vosotras",
        "ellos", "ellas", "ustedes",
    ],
    imperative_constructions: vec![
        compile(r"(?i)^\s*(?:por\s+favor|porfa)\s+\w+"),
        compile(r"(?i)^\s*no\s+(?:te\s+)?olvides\b"),
        compile(r"(?i)^\s*recuerda\s+(?:que\s+)?\w+"),
        compile(r"(?i)^\s*hay\s+que\b"),
    ],
    modals: vec![
        compile(r"(?i)\b(?:debo|debes|debe|debemos|deben|debería|deberia|deberías|deberíamos)\b"),
        compile(r"(?i)\b(?:tengo|tienes|tiene|tenemos|tienen) que\b"),
        compile(r"(?i)\b(?:necesito|necesitas|necesita|necesitamos|hay que)\b"),
    ],
    action_verbs: vec![
        labeled("comprar", r"compra|comprar"),
        labeled("llamar", r"llama|llamar"),
        labeled("enviar", r"envía|envia|enviar|manda|mandar"),
        labeled("arreglar", r"arregla|arreglar"),
        labeled("programar", r"programa|programar|agenda|agendar"),
        labeled("reservar", r"reserva|reservar"),
        labeled("pagar", r"paga|pagar"),
        labeled("escribir", r"escribe|escribir"),
        labeled("terminar", r"termina|terminar"),
        labeled("entregar", r"entrega|entregar"),
        labeled("limpiar", r"limpia|limpiar"),
        labeled("recoger", r"recoge|recoger"),
        labeled("revisar", r"revisa|revisar"),
        labeled("pedir", r"pide|pedir"),
        labeled("cancelar", r"cancela|cancelar"),
        labeled("renovar", r"renueva|renovar"),
        labeled("devolver", r"devuelve|devolver"),
        labeled("preparar", r"prepara|preparar"),
        labeled("actualizar", r"actualiza|actualizar"),
        labeled("organizar", r"organiza|organizar"),
        labeled("construir", r"construye|construir"),
        labeled("contactar", r"contacta|contactar"),
        labeled("responder", r"responde|responder"),
    ],
    obligation_cues: vec![
        labeled("tengo que", r"(?:tengo|tienes|tenemos) que"),
        labeled("hay que", r"hay que"),
        labeled("debo", r"debo|debes|debemos"),
        labeled("necesito", r"necesito|necesitas|necesitamos"),
        labeled("recuerda", r"recuerda|recordar"),
        labeled("no olvides", r"no (?:te )?olvides"),
    ],
    question_words: vec![
        compile(r"(?i)\b(?:qué|cómo|cuándo|dónde|quién|quiénes|cuál|cuáles|cuánto|cuánta|cuántos|cuántas)\b"),
        compile(r"(?i)\bpor qué\b"),
        compile(r"¿"),
    ],
    thought_patterns: vec![
        compile(r"(?i)\b(?:qué pasaría si|y si)\b"),
        compile(r"(?i)\bme pregunto\b"),
        compile(r"(?i)\bsería (?:interesante|bueno|genial|bonito|divertido)\b"),
        compile(r"(?i)\b(?:creo|pienso|siento) que\b"),
        compile(r"(?i)\bme di cuenta\b"),
        compile(r"(?i)\bhe estado pensando\b"),
        compile(r"(?i)\b(?:se me ocurre|se me ocurrió|me recuerda|imagina si)\b"),
    ],
    intent_patterns: vec![
        labeled("quiero", r"quiero|quisiera"),
        labeled("me gustaría", r"me gustaría|me gustaria"),
        labeled("estoy pensando en", r"estoy pensando en"),
        labeled("me encantaría", r"me encantaría|me encantaria"),
        labeled("ojalá", r"ojalá|ojala"),
        labeled("espero", r"espero"),
        labeled("sueño con", r"sueño con"),
        labeled("tengo ganas de", r"tengo ganas de"),
    ],
    date_patterns: vec![
        compile(r"(?i)\b(?:pasado mañana|hoy|mañana|ayer)\b"),
        compile(r"(?i)\b(?:lunes|martes|miércoles|miercoles|jueves|viernes|sábado|sabado|domingo)\b"),
        compile(
            r"(?i)\b\d{1,2}\s+de\s+(?:enero|febrero|marzo|abril|mayo|junio|julio|agosto|septiembre|setiembre|octubre|noviembre|diciembre)\b",
        ),
        compile(r"\b\d{1,2}[/-]\d{1,2}(?:[/-]\d{2,4})?\b"),
        compile(r"(?i)\b(?:pr[oó]xim[oa]|est[ea])\s+(?:semana|fin de semana|mes|año)\b"),
    ],
    time_patterns: vec![
        compile(CLOCK_TIME),
        compile(r"(?i)\b(?:por la (?:mañana|tarde|noche)|esta (?:noche|tarde)|mediodía|medianoche)\b"),
        compile(r"(?i)\ba las?\s+\d{1,2}\b"),
    ],
});

// Shared bilingual scoring sets

pub static STRONG_OBLIGATION: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:needs? to|ha(?:ve|s) to|must|should do|remember to|don['’]?t forget|do not forget|tengo que|tienes que|tenemos que|hay que|debo|necesito|recuerda|no (?:te )?olvides)\b",
    )
});

/// Strong modality subset, excluded from the weak-modal note signal
pub static STRONG_MODALITY: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:must|needs? to|ha(?:ve|s) to|tengo que|tienes que|tenemos que|hay que|debo|debes|debemos|necesito)\b",
    )
});

pub static TASK_NOUNS: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:meeting|appointment|call|deadline|due|schedule|book|pay|submit|reunión|reunion|cita|llamada|llamar|plazo|fecha límite|vence|agenda|reservar|pagar|entregar)\b",
    )
});

pub static PAST_TENSE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:was|were|had|did|went|saw|heard|read|fue|fui|era|estaba|tuve|hice|vi|escuché|leí|había)\b",
    )
});

pub static NOTE_NOUNS: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:idea|thought|note|insight|interesting|cool|weird|funny|pensamiento|nota|interesante|curioso|raro|gracioso|genial)\b",
    )
});

pub static HEDGING: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:maybe|perhaps|could|might|possibly|quizás|quizá|quizas|tal vez|a lo mejor|podría|podria|posiblemente)\b",
    )
});

pub static FUTURE_MARKERS: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:will|going to|gonna|voy a|vas a|va a|vamos a|iré|haré)\b")
});

// Urgency ladder, evaluated top to bottom

pub static URGENCY_IMMEDIATE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:urgent|urgently|asap|immediately|now|right away|emergency|urgente|ya mismo|ahora|inmediatamente|de inmediato|enseguida|emergencia)\b",
    )
});

pub static URGENCY_SOON: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:today|tomorrow|this week|soon|quickly|fast|hoy|mañana|esta semana|pronto|rápido|rapido)\b",
    )
});

pub static URGENCY_FUTURE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:next week|next month|next year|someday|eventually|later|pr[oó]xima semana|pr[oó]ximo mes|pr[oó]ximo año|algún día|algun dia|eventualmente|más tarde|luego)\b",
    )
});
