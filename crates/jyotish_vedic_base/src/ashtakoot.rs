//! Ashtakoot (eight-koota) compatibility tables.
//!
//! Each koota compares the bride's and groom's natal Moons and scores out
//! of a fixed maximum (1 + 2 + … + 8 = 36). Nadi, Bhakoot and Gana can
//! raise a dosha, which classical exceptions may cancel.
//!
//! Asymmetric tables are indexed with the groom in the row and the bride
//! in the column.

use serde::{Deserialize, Serialize};

use crate::dignity::{Relation, mutual_friends, naisargika_maitri};
use crate::graha::rashi_lord;
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};
use crate::rashi::{Rashi, rashi_from_longitude};

/// Highest possible total.
pub const MAX_TOTAL: f64 = 36.0;

/// Natal Moon as used for matching.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonPosition {
    pub sign: Rashi,
    pub degree_in_sign: f64,
    pub nakshatra: Nakshatra,
    /// 1..=4.
    pub pada: u8,
}

impl MoonPosition {
    pub fn from_longitude(sidereal_deg: f64) -> Self {
        let r = rashi_from_longitude(sidereal_deg);
        let n = nakshatra_from_longitude(sidereal_deg);
        Self {
            sign: r.rashi,
            degree_in_sign: r.degree_in_sign,
            nakshatra: n.nakshatra,
            pada: n.pada,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Koota {
    Varna,
    Vashya,
    Tara,
    Yoni,
    GrahaMaitri,
    Gana,
    Bhakoot,
    Nadi,
}

impl Koota {
    pub const ALL: [Koota; 8] = [
        Koota::Varna,
        Koota::Vashya,
        Koota::Tara,
        Koota::Yoni,
        Koota::GrahaMaitri,
        Koota::Gana,
        Koota::Bhakoot,
        Koota::Nadi,
    ];

    pub const fn max(self) -> f64 {
        match self {
            Self::Varna => 1.0,
            Self::Vashya => 2.0,
            Self::Tara => 3.0,
            Self::Yoni => 4.0,
            Self::GrahaMaitri => 5.0,
            Self::Gana => 6.0,
            Self::Bhakoot => 7.0,
            Self::Nadi => 8.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Varna => "Varna",
            Self::Vashya => "Vashya",
            Self::Tara => "Tara",
            Self::Yoni => "Yoni",
            Self::GrahaMaitri => "Graha Maitri",
            Self::Gana => "Gana",
            Self::Bhakoot => "Bhakoot",
            Self::Nadi => "Nadi",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KootaStatus {
    Pass,
    Partial,
    Fail,
    Dosha,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoshaKind {
    Nadi,
    Bhakoot,
    Gana,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KootaScore {
    pub koota: Koota,
    pub score: f64,
    pub max: f64,
    pub status: KootaStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosha: Option<DoshaKind>,
    pub cancelled: bool,
}

impl KootaScore {
    fn plain(koota: Koota, score: f64) -> Self {
        let max = koota.max();
        let status = if score >= max {
            KootaStatus::Pass
        } else if score <= 0.0 {
            KootaStatus::Fail
        } else {
            KootaStatus::Partial
        };
        Self {
            koota,
            score,
            max,
            status,
            dosha: None,
            cancelled: false,
        }
    }

    // An uncancelled dosha reports status Dosha; a cancelled one Partial.
    fn with_dosha(koota: Koota, score: f64, kind: DoshaKind, cancelled: bool) -> Self {
        Self {
            status: if cancelled {
                KootaStatus::Partial
            } else {
                KootaStatus::Dosha
            },
            dosha: Some(kind),
            cancelled,
            ..Self::plain(koota, score)
        }
    }

    /// Dosha present and not cancelled.
    pub fn is_active_dosha(&self) -> bool {
        self.dosha.is_some() && !self.cancelled
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Verdict {
    Low,
    Medium,
    High,
}

impl Verdict {
    pub const fn from_total(total: f64) -> Self {
        if total < 18.0 {
            Self::Low
        } else if total <= 24.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub const fn lowered(self) -> Self {
        match self {
            Self::High => Self::Medium,
            _ => Self::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AshtakootResult {
    pub kootas: Vec<KootaScore>,
    pub total: f64,
    pub max: f64,
    pub verdict: Verdict,
}

impl AshtakootResult {
    pub fn koota(&self, koota: Koota) -> Option<&KootaScore> {
        self.kootas.iter().find(|k| k.koota == koota)
    }
}

// --- Varna ---------------------------------------------------------------

// Brahmin 4, Kshatriya 3, Vaishya 2, Shudra 1, by sign element.
const fn varna_rank(sign: Rashi) -> u8 {
    match sign {
        Rashi::Cancer | Rashi::Scorpio | Rashi::Pisces => 4,
        Rashi::Aries | Rashi::Leo | Rashi::Sagittarius => 3,
        Rashi::Taurus | Rashi::Virgo | Rashi::Capricorn => 2,
        Rashi::Gemini | Rashi::Libra | Rashi::Aquarius => 1,
    }
}

fn varna(bride: &MoonPosition, groom: &MoonPosition) -> KootaScore {
    let score = if varna_rank(groom.sign) >= varna_rank(bride.sign) {
        1.0
    } else {
        0.0
    };
    KootaScore::plain(Koota::Varna, score)
}

// --- Vashya --------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VashyaGroup {
    Chatushpada,
    Manava,
    Jalachara,
    Vanachara,
    Keeta,
}

fn vashya_group(m: &MoonPosition) -> VashyaGroup {
    let first_half = m.degree_in_sign < 15.0;
    match m.sign {
        Rashi::Aries | Rashi::Taurus => VashyaGroup::Chatushpada,
        Rashi::Gemini | Rashi::Virgo | Rashi::Libra | Rashi::Aquarius => VashyaGroup::Manava,
        Rashi::Cancer | Rashi::Pisces => VashyaGroup::Jalachara,
        Rashi::Leo => VashyaGroup::Vanachara,
        Rashi::Scorpio => VashyaGroup::Keeta,
        Rashi::Sagittarius if first_half => VashyaGroup::Manava,
        Rashi::Sagittarius => VashyaGroup::Chatushpada,
        Rashi::Capricorn if first_half => VashyaGroup::Chatushpada,
        Rashi::Capricorn => VashyaGroup::Jalachara,
    }
}

// Row: groom, column: bride.
const VASHYA: [[f64; 5]; 5] = [
    [2.0, 1.0, 1.0, 0.5, 1.0],
    [1.0, 2.0, 0.5, 0.0, 1.0],
    [1.0, 0.5, 2.0, 1.0, 1.0],
    [0.5, 0.0, 1.0, 2.0, 0.0],
    [1.0, 1.0, 1.0, 0.0, 2.0],
];

fn vashya(bride: &MoonPosition, groom: &MoonPosition) -> KootaScore {
    let score = VASHYA[vashya_group(groom) as usize][vashya_group(bride) as usize];
    KootaScore::plain(Koota::Vashya, score)
}

// --- Tara ----------------------------------------------------------------

fn tara_is_good(from: Nakshatra, to: Nakshatra) -> bool {
    let count = (i16::from(to.index()) - i16::from(from.index())).rem_euclid(27) + 1;
    !matches!(count % 9, 3 | 5 | 7)
}

fn tara(bride: &MoonPosition, groom: &MoonPosition) -> KootaScore {
    let good = [
        tara_is_good(bride.nakshatra, groom.nakshatra),
        tara_is_good(groom.nakshatra, bride.nakshatra),
    ];
    let score = match good.iter().filter(|g| **g).count() {
        2 => 3.0,
        1 => 1.5,
        _ => 0.0,
    };
    KootaScore::plain(Koota::Tara, score)
}

// --- Yoni ----------------------------------------------------------------

// Animal order: Horse, Elephant, Sheep, Serpent, Dog, Cat, Rat, Cow,
// Buffalo, Tiger, Deer, Monkey, Mongoose, Lion.
const YONI_OF_NAKSHATRA: [u8; 27] = [
    0, 1, 2, 3, 3, 4, 5, 2, 5, 6, 6, 7, 8, 9, 8, 9, 10, 10, 4, 11, 12, 11, 13, 0, 13, 7, 1,
];

const YONI: [[u8; 14]; 14] = [
    [4, 2, 2, 3, 2, 2, 2, 1, 0, 1, 3, 3, 2, 1],
    [2, 4, 3, 3, 2, 2, 2, 2, 3, 1, 2, 3, 2, 0],
    [2, 3, 4, 2, 1, 2, 1, 3, 3, 1, 2, 0, 3, 1],
    [3, 3, 2, 4, 2, 1, 1, 1, 1, 2, 2, 2, 0, 2],
    [2, 2, 1, 2, 4, 2, 1, 2, 2, 1, 0, 2, 1, 1],
    [2, 2, 2, 1, 2, 4, 0, 2, 2, 1, 3, 3, 2, 1],
    [2, 2, 1, 1, 1, 0, 4, 2, 2, 2, 2, 2, 1, 2],
    [1, 2, 3, 1, 2, 2, 2, 4, 3, 0, 3, 2, 2, 1],
    [0, 3, 3, 1, 2, 2, 2, 3, 4, 1, 2, 2, 2, 1],
    [1, 1, 1, 2, 1, 1, 2, 0, 1, 4, 1, 1, 2, 1],
    [3, 2, 2, 2, 0, 3, 2, 3, 2, 1, 4, 2, 2, 1],
    [3, 3, 0, 2, 2, 3, 2, 2, 2, 1, 2, 4, 3, 2],
    [2, 2, 3, 0, 1, 2, 1, 2, 2, 2, 2, 3, 4, 2],
    [1, 0, 1, 2, 1, 1, 2, 1, 1, 1, 1, 2, 2, 4],
];

fn yoni(bride: &MoonPosition, groom: &MoonPosition) -> KootaScore {
    let b = YONI_OF_NAKSHATRA[bride.nakshatra.index() as usize] as usize;
    let g = YONI_OF_NAKSHATRA[groom.nakshatra.index() as usize] as usize;
    KootaScore::plain(Koota::Yoni, f64::from(YONI[g][b]))
}

// --- Graha maitri --------------------------------------------------------

fn graha_maitri(bride: &MoonPosition, groom: &MoonPosition) -> KootaScore {
    let bl = rashi_lord(bride.sign);
    let gl = rashi_lord(groom.sign);
    let score = if bl == gl {
        5.0
    } else {
        use Relation::{Enemy, Friend, Neutral};
        match (naisargika_maitri(bl, gl), naisargika_maitri(gl, bl)) {
            (Friend, Friend) => 5.0,
            (Friend, Neutral) | (Neutral, Friend) => 4.0,
            (Neutral, Neutral) => 3.0,
            (Friend, Enemy) | (Enemy, Friend) => 1.0,
            (Neutral, Enemy) | (Enemy, Neutral) => 0.5,
            (Enemy, Enemy) => 0.0,
        }
    };
    KootaScore::plain(Koota::GrahaMaitri, score)
}

fn lords_same_or_friendly(a: Rashi, b: Rashi) -> bool {
    let (la, lb) = (rashi_lord(a), rashi_lord(b));
    la == lb || mutual_friends(la, lb)
}

// --- Gana ----------------------------------------------------------------

// 0 Deva, 1 Manushya, 2 Rakshasa.
const GANA_OF_NAKSHATRA: [u8; 27] = [
    0, 1, 2, 1, 0, 1, 0, 0, 2, 2, 1, 1, 0, 2, 0, 2, 0, 2, 2, 1, 1, 0, 2, 2, 1, 1, 0,
];

// Row: groom, column: bride.
const GANA: [[f64; 3]; 3] = [[6.0, 6.0, 1.0], [5.0, 6.0, 0.0], [1.0, 0.0, 6.0]];

fn gana(bride: &MoonPosition, groom: &MoonPosition) -> KootaScore {
    let b = GANA_OF_NAKSHATRA[bride.nakshatra.index() as usize];
    let g = GANA_OF_NAKSHATRA[groom.nakshatra.index() as usize];
    let score = GANA[g as usize][b as usize];
    // Rakshasa against a non-Rakshasa
    if (b == 2) != (g == 2) {
        let cancelled = lords_same_or_friendly(bride.sign, groom.sign);
        KootaScore::with_dosha(Koota::Gana, score, DoshaKind::Gana, cancelled)
    } else {
        KootaScore::plain(Koota::Gana, score)
    }
}

// --- Bhakoot -------------------------------------------------------------

fn bhakoot(bride: &MoonPosition, groom: &MoonPosition) -> KootaScore {
    let forward = (i16::from(groom.sign.index()) - i16::from(bride.sign.index())).rem_euclid(12) + 1;
    if matches!(forward, 2 | 12 | 5 | 9 | 6 | 8) {
        let cancelled = lords_same_or_friendly(bride.sign, groom.sign);
        KootaScore::with_dosha(Koota::Bhakoot, 0.0, DoshaKind::Bhakoot, cancelled)
    } else {
        KootaScore::plain(Koota::Bhakoot, 7.0)
    }
}

// --- Nadi ----------------------------------------------------------------

// 0 Adi, 1 Madhya, 2 Antya.
const NADI_OF_NAKSHATRA: [u8; 27] = [
    0, 1, 2, 2, 1, 0, 0, 1, 2, 2, 1, 0, 0, 1, 2, 2, 1, 0, 0, 1, 2, 2, 1, 0, 0, 1, 2,
];

fn nadi(bride: &MoonPosition, groom: &MoonPosition) -> KootaScore {
    let b = NADI_OF_NAKSHATRA[bride.nakshatra.index() as usize];
    let g = NADI_OF_NAKSHATRA[groom.nakshatra.index() as usize];
    if b != g {
        return KootaScore::plain(Koota::Nadi, 8.0);
    }
    let same_star = bride.nakshatra == groom.nakshatra;
    let cancelled = (same_star && (bride.pada != groom.pada || bride.sign != groom.sign))
        || (!same_star && bride.sign == groom.sign);
    KootaScore::with_dosha(Koota::Nadi, 0.0, DoshaKind::Nadi, cancelled)
}

/// Score all eight kootas.
pub fn ashtakoot(bride: &MoonPosition, groom: &MoonPosition) -> AshtakootResult {
    let kootas = vec![
        varna(bride, groom),
        vashya(bride, groom),
        tara(bride, groom),
        yoni(bride, groom),
        graha_maitri(bride, groom),
        gana(bride, groom),
        bhakoot(bride, groom),
        nadi(bride, groom),
    ];
    let total: f64 = kootas.iter().map(|k| k.score).sum();
    let mut verdict = Verdict::from_total(total);
    if kootas
        .iter()
        .any(|k| matches!(k.dosha, Some(DoshaKind::Nadi | DoshaKind::Bhakoot)) && k.is_active_dosha())
    {
        verdict = verdict.lowered();
    }
    AshtakootResult {
        kootas,
        total,
        max: MAX_TOTAL,
        verdict,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moon(sign: Rashi, nakshatra: Nakshatra, pada: u8) -> MoonPosition {
        MoonPosition {
            sign,
            degree_in_sign: 10.0,
            nakshatra,
            pada,
        }
    }

    fn score(r: &AshtakootResult, k: Koota) -> f64 {
        r.koota(k).expect("koota").score
    }

    #[test]
    fn yoni_table_is_symmetric() {
        for i in 0..14 {
            for j in 0..14 {
                assert_eq!(YONI[i][j], YONI[j][i], "{i},{j}");
            }
        }
    }

    #[test]
    fn group_tables_cover_nine_stars_each() {
        for g in 0..3 {
            assert_eq!(GANA_OF_NAKSHATRA.iter().filter(|x| **x == g).count(), 9);
            assert_eq!(NADI_OF_NAKSHATRA.iter().filter(|x| **x == g).count(), 9);
        }
    }

    #[test]
    fn cancer_pushya_with_scorpio_anuradha() {
        let bride = moon(Rashi::Cancer, Nakshatra::Pushya, 2);
        let groom = moon(Rashi::Scorpio, Nakshatra::Anuradha, 3);
        let r = ashtakoot(&bride, &groom);
        assert_eq!(score(&r, Koota::Varna), 1.0);
        assert_eq!(score(&r, Koota::Vashya), 1.0);
        assert_eq!(score(&r, Koota::Tara), 3.0);
        assert_eq!(score(&r, Koota::Yoni), 2.0);
        assert_eq!(score(&r, Koota::GrahaMaitri), 4.0);
        assert_eq!(score(&r, Koota::Gana), 6.0);
        let bhakoot = r.koota(Koota::Bhakoot).expect("bhakoot");
        assert_eq!(bhakoot.score, 0.0);
        assert_eq!(bhakoot.dosha, Some(DoshaKind::Bhakoot));
        assert!(!bhakoot.cancelled);
        assert_eq!(bhakoot.status, KootaStatus::Dosha);
        let nadi = r.koota(Koota::Nadi).expect("nadi");
        assert_eq!(nadi.dosha, Some(DoshaKind::Nadi));
        assert!(!nadi.cancelled);
        assert_eq!(r.total, 17.0);
        assert_eq!(r.verdict, Verdict::Low);
    }

    #[test]
    fn identical_moons_score_high_but_nadi_is_cancelled_by_pada() {
        let bride = moon(Rashi::Taurus, Nakshatra::Rohini, 1);
        let groom = moon(Rashi::Taurus, Nakshatra::Rohini, 3);
        let r = ashtakoot(&bride, &groom);
        let nadi = r.koota(Koota::Nadi).expect("nadi");
        assert_eq!(nadi.dosha, Some(DoshaKind::Nadi));
        assert!(nadi.cancelled);
        assert_eq!(nadi.status, KootaStatus::Partial);
        // 1 + 2 + 3 + 4 + 5 + 6 + 7 + 0
        assert_eq!(score(&r, Koota::Tara), 3.0);
        assert_eq!(r.total, 28.0);
        assert_eq!(r.verdict, Verdict::High);
    }

    #[test]
    fn bhakoot_dosha_cancelled_by_friendly_lords() {
        // Aries (Mars) and Leo (Sun): 5/9, Sun and Mars are mutual friends
        let bride = moon(Rashi::Aries, Nakshatra::Ashwini, 1);
        let groom = moon(Rashi::Leo, Nakshatra::Magha, 1);
        let r = ashtakoot(&bride, &groom);
        let b = r.koota(Koota::Bhakoot).expect("bhakoot");
        assert_eq!(b.dosha, Some(DoshaKind::Bhakoot));
        assert!(b.cancelled);
    }

    #[test]
    fn gana_dosha_for_deva_and_rakshasa() {
        let bride = moon(Rashi::Aries, Nakshatra::Ashwini, 1);
        let groom = moon(Rashi::Gemini, Nakshatra::Ardra, 2);
        let r = ashtakoot(&bride, &groom);
        let g = r.koota(Koota::Gana).expect("gana");
        // Ardra is Manushya: no dosha
        assert_eq!(g.dosha, None);
        let groom = moon(Rashi::Cancer, Nakshatra::Ashlesha, 4);
        let g = *ashtakoot(&bride, &groom).koota(Koota::Gana).expect("gana");
        assert_eq!(g.score, 1.0);
        assert_eq!(g.dosha, Some(DoshaKind::Gana));
        // Mars and Moon are not mutual friends
        assert!(!g.cancelled);
    }

    #[test]
    fn vashya_uses_sign_halves() {
        let early = MoonPosition {
            degree_in_sign: 5.0,
            ..moon(Rashi::Sagittarius, Nakshatra::Mula, 2)
        };
        let late = MoonPosition {
            degree_in_sign: 25.0,
            ..moon(Rashi::Sagittarius, Nakshatra::PurvaAshadha, 4)
        };
        assert_eq!(vashya_group(&early), VashyaGroup::Manava);
        assert_eq!(vashya_group(&late), VashyaGroup::Chatushpada);
    }

    #[test]
    fn every_koota_is_within_its_maximum() {
        for b in 0..108u16 {
            for g in (0..108u16).step_by(7) {
                let bride = MoonPosition::from_longitude(f64::from(b) * 3.3333 + 0.1);
                let groom = MoonPosition::from_longitude(f64::from(g) * 3.3333 + 0.1);
                let r = ashtakoot(&bride, &groom);
                assert_eq!(r.kootas.len(), 8);
                for k in &r.kootas {
                    assert!(k.score >= 0.0 && k.score <= k.max, "{k:?}");
                }
                assert!(r.total <= MAX_TOTAL);
            }
        }
    }

    #[test]
    fn verdict_bands() {
        assert_eq!(Verdict::from_total(17.5), Verdict::Low);
        assert_eq!(Verdict::from_total(18.0), Verdict::Medium);
        assert_eq!(Verdict::from_total(24.0), Verdict::Medium);
        assert_eq!(Verdict::from_total(24.5), Verdict::High);
        assert_eq!(Verdict::High.lowered(), Verdict::Medium);
        assert_eq!(Verdict::Low.lowered(), Verdict::Low);
    }
}
