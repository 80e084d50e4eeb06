//! Keyword pattern tables, compiled once per process.
//!
//! Every pattern is matched against lowercased content with unanchored
//! substring search, so `"end"` fires inside `"friend"` and `"log"` inside
//! `"login"`. That looseness is part of the classifier's observable behavior.

use std::sync::OnceLock;

use happy_core::enums::Gitmoji;
use regex::Regex;

/// Marker rules in priority order. Must stay aligned with [`Gitmoji::ALL`].
const CATALOG: [(Gitmoji, &str); 25] = [
    (
        Gitmoji::Sparkles,
        r"new|feature|idea|created|inspired|achievement|innovation|launch|debut|unveiled|introduce|breakthrough|novel|original",
    ),
    (
        Gitmoji::Bug,
        r"bug|issue|problem|error|fix|solved|defect|glitch|trouble|malfunction|failure|resolved|debugging|patch|repair|corrected",
    ),
    (
        Gitmoji::Boom,
        r"change|transform|pivot|shift|overhaul|revamp|redesign|convert|transition|restructure|revolution|fundamental|reshape|alter",
    ),
    (
        Gitmoji::Rocket,
        r"improve|faster|better|upgrade|progress|enhance|optimize|boost|accelerate|efficiency|performance|streamline|speed|advance",
    ),
    (
        Gitmoji::Memo,
        r"note|document|journal|reflect|think|record|log|diary|write|transcript|minutes|notation|reminder|chronicle|archive|paper",
    ),
    (
        Gitmoji::Bulb,
        r"idea|thought|solution|concept|innovation|insight|inspiration|creative|brainstorm|vision|imagine|discover|clever|brilliant",
    ),
    (
        Gitmoji::Heart,
        r"love|thank|grateful|appreciate|happy|adore|cherish|admire|fond|enjoy|delight|pleasure|devoted|affection|thankful|caring|mom|mother|family|care|support",
    ),
    (
        Gitmoji::Zap,
        r"energy|power|motivation|drive|focus|spark|intensity|force|vigor|strength|momentum|vitality|dynamic|impulse|enthusiasm",
    ),
    (
        Gitmoji::Tada,
        r"celebrate|celebration|party|award|achievement|accomplishment|milestone|victory|win|championship|promotion|success|congratulations|graduated|honor",
    ),
    (
        Gitmoji::Fire,
        r"remove|delete|eliminate|stop|end|terminate|cancel|discard|abolish|discontinue|cease|halt|erase|destroy|purge|extinguish",
    ),
    (
        Gitmoji::Lock,
        r"secure|private|protect|safe|careful|guard|shield|defend|encrypt|confidential|safeguard|privacy|restrict|classified|caution",
    ),
    (
        Gitmoji::Construction,
        r"work|progress|building|developing|creating|construct|fabricate|assemble|form|craft|establish|setup|prepare|foundation",
    ),
    (
        Gitmoji::Recycle,
        r"routine|repeat|habit|cycle|pattern|loop|reuse|circular|recurring|regular|systematic|continual|periodic|iterative|constant",
    ),
    (
        Gitmoji::Wrench,
        r"adjust|configure|setup|organize|maintain|tune|calibrate|modify|tweak|customize|tool|fix|repair|arrangement|adapt|arrange",
    ),
    (
        Gitmoji::Brain,
        r"mental|mind|thought|learn|understand|stress|cognitive|intellect|knowledge|wisdom|comprehend|intelligence|study|memory|think",
    ),
    (
        Gitmoji::Eyes,
        r"watch|observe|notice|see|look|discover|witness|perceive|spot|detect|view|monitor|inspect|examine|surveillance|recognize",
    ),
    (
        Gitmoji::Dizzy,
        r"confused|dizzy|overwhelmed|disoriented|complicated|complex|challenging|difficult|puzzling|bewildered|lost|perplexed",
    ),
    (
        Gitmoji::Chart,
        r"data|metrics|statistics|analyze|measurement|graph|trend|track|monitor|evaluate|assess|report|quantify|numbers|figures",
    ),
    (
        Gitmoji::Seedling,
        r"grow|begin|start|initial|early|seed|embryonic|nascent|budding|emerging|sprouting|developing|young|commence|genesis",
    ),
    (
        Gitmoji::Globe,
        r"world|global|international|earth|planet|worldwide|universal|abroad|foreign|everywhere|geographic|travel|culture|space",
    ),
    (
        Gitmoji::Art,
        r"creative|design|artistic|beautiful|aesthetic|craft|style|visual|drawing|painting|illustration|composition|artwork|expressive",
    ),
    (
        Gitmoji::Bookmark,
        r"save|remember|important|reference|bookmark|mark|highlight|notable|significant|key|crucial|essential|vital|critical",
    ),
    (
        Gitmoji::Hourglass,
        r"time|wait|deadline|duration|period|schedule|patience|delay|temporary|timing|countdown|interval|pending|awaiting",
    ),
    (
        Gitmoji::Muscle,
        r"strength|effort|hard|difficult|struggle|powerful|force|exertion|strenuous|tough|determined|persistence|resilience",
    ),
    (
        Gitmoji::Money,
        r"finance|cost|expense|budget|payment|money|financial|economic|invest|fund|profit|income|revenue|cash|saving|price",
    ),
];

/// Grief, loss and solemn-occasion phrasing.
const SERIOUS_CONTEXT: [&str; 4] = [
    r"mom|mother|dad|father|parent|family|passed away|died|death|illness|sick|hospital|grave|funeral|cancer|disease",
    r"love you|miss you|remembering|memory|memories|never forget|always remember|thinking of you|in my heart",
    r"sincere|deep|heartfelt|sorrow|grief|mourn|regret|sympathy|condolence|prayer|blessing|sacred|spiritual",
    r"anniversary|birthday|wedding|graduation|retirement|milestone|special day|important occasion",
];

/// Explicitly festive phrasing.
const CELEBRATORY_CONTEXT: [&str; 2] = [
    r"party|celebrate|festival|award|prize|won|congratulation|cheer|hooray|yay|woohoo|awesome|amazing",
    r"birthday party|graduation ceremony|wedding celebration|promotion party|launch event|grand opening",
];

const FAMILY: &str = r"mom|mother|dad|father|parent|family";
const THANKS: &str = r"thank|grateful|appreciate";

static PATTERNS: OnceLock<PatternSet> = OnceLock::new();

/// Compiled form of every table above.
#[derive(Debug)]
pub(crate) struct PatternSet {
    pub catalog: Vec<(Gitmoji, Regex)>,
    pub serious: Vec<Regex>,
    pub celebratory: Vec<Regex>,
    pub family: Regex,
    pub thanks: Regex,
}

impl PatternSet {
    fn new() -> Self {
        Self {
            catalog: CATALOG
                .iter()
                .map(|(gitmoji, source)| (*gitmoji, compile(source)))
                .collect(),
            serious: SERIOUS_CONTEXT.iter().map(|s| compile(s)).collect(),
            celebratory: CELEBRATORY_CONTEXT.iter().map(|s| compile(s)).collect(),
            family: compile(FAMILY),
            thanks: compile(THANKS),
        }
    }

    /// Any grief/solemnity group matches.
    pub fn is_serious(&self, lowered: &str) -> bool {
        self.serious.iter().any(|re| re.is_match(lowered))
    }

    /// Any celebration group matches.
    pub fn is_celebratory(&self, lowered: &str) -> bool {
        self.celebratory.iter().any(|re| re.is_match(lowered))
    }
}

fn compile(source: &str) -> Regex {
    Regex::new(source).expect("built-in keyword pattern must compile")
}

/// The process-wide pattern set.
pub(crate) fn patterns() -> &'static PatternSet {
    PATTERNS.get_or_init(PatternSet::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_follows_gitmoji_declaration_order() {
        let order: Vec<Gitmoji> = CATALOG.iter().map(|(g, _)| *g).collect();
        assert_eq!(order, Gitmoji::ALL.to_vec());
    }

    #[test]
    fn every_pattern_compiles() {
        let set = patterns();
        assert_eq!(set.catalog.len(), 25);
        assert_eq!(set.serious.len(), 4);
        assert_eq!(set.celebratory.len(), 2);
    }

    #[test]
    fn context_detectors_are_independent() {
        let set = patterns();
        assert!(set.is_serious("my mother passed away"));
        assert!(!set.is_celebratory("my mother passed away"));
        assert!(set.is_celebratory("we won the award"));
        assert!(!set.is_serious("we won the award"));
        assert!(set.is_serious("birthday party"));
        assert!(set.is_celebratory("birthday party"));
    }

    #[test]
    fn matching_is_substring_based() {
        let set = patterns();
        let fire = &set.catalog[9];
        assert_eq!(fire.0, Gitmoji::Fire);
        assert!(fire.1.is_match("my friend"));
    }
}
