//! Profile, contact and education copy.

use super::Localized;

/// Number of segments in the language confidence meter.
pub const CONFIDENCE_SCALE: u8 = 5;

#[derive(Debug)]
pub struct ContactItem {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

#[derive(Debug)]
pub struct Education {
    pub period: &'static str,
    pub program: &'static str,
    pub school: &'static str,
    pub focus: &'static str,
}

#[derive(Debug)]
pub struct LanguageLevel {
    pub name: &'static str,
    pub level: &'static str,
    /// Filled segments out of [`CONFIDENCE_SCALE`].
    pub confidence: u8,
}

#[derive(Debug)]
pub struct AboutCopy {
    pub profile_title: &'static str,
    pub profile_paragraphs: &'static [&'static str],
    pub contact_title: &'static str,
    pub contact_info: &'static [ContactItem],
    pub education_title: &'static str,
    pub education: Education,
    pub languages_title: &'static str,
    pub language_levels: &'static [LanguageLevel],
    pub toolkit_title: &'static str,
    pub technical_skills: &'static [&'static str],
}

const EMAIL: &str = "semih.bic.er@hotmail.com";

pub static ABOUT: Localized<AboutCopy> = Localized {
    en: AboutCopy {
        profile_title: "Profile",
        profile_paragraphs: &[
            "I'm a computer engineer who loves building interactive systems. My journey blends academic research \
             with practical game development—optimizing feel, implementing gameplay loops, and connecting code to \
             player delight. I enjoy translating design intent into clean, reusable systems.",
            "Outside of code, you'll find me testing new indie titles, sketching level ideas, and exploring how \
             machine learning can support smarter gameplay experiences.",
        ],
        contact_title: "Contact",
        contact_info: &[
            ContactItem { label: "Email", value: EMAIL, href: Some("mailto:semih.bic.er@hotmail.com") },
            ContactItem { label: "Phone", value: "+90 531 614 1027", href: Some("tel:+905316141027") },
            ContactItem { label: "GitHub", value: "Semi-Bicer", href: Some("https://github.com/Semi-Bicer") },
            ContactItem {
                label: "LinkedIn",
                value: "semih-bahadir-bicer",
                href: Some("https://www.linkedin.com/in/semih-bahadir-bicer"),
            },
            ContactItem { label: "Location", value: "Denizli, Türkiye", href: None },
        ],
        education_title: "Education",
        education: Education {
            period: "2024 - Present",
            program: "Computer Engineering",
            school: "Pamukkale University",
            focus: "Specializing in game development, applied artificial intelligence, and modern software \
                    engineering practices.",
        },
        languages_title: "Language Confidence",
        language_levels: &[
            LanguageLevel { name: "English", level: "B2", confidence: 4 },
            LanguageLevel { name: "Japanese", level: "JLPT N4", confidence: 2 },
        ],
        toolkit_title: "Technical Toolkit",
        technical_skills: &["Unity", "C#", "C++", "Python", "Machine Learning", "Git & GitHub"],
    },
    tr: AboutCopy {
        profile_title: "Profil",
        profile_paragraphs: &[
            "Etkileşimli sistemler kurmaktan keyif alan bir bilgisayar mühendisiyim. Akademik araştırmalarla pratik \
             oyun geliştirmeyi harmanlayarak oyun hissini iyileştiriyor, oynanış döngülerini kuruyor ve kodu oyuncu \
             deneyimine bağlıyorum. Tasarım hedeflerini temiz ve yeniden kullanılabilir sistemlere dönüştürmekten \
             hoşlanıyorum.",
            "Kod dışında kalan vakitlerimde yeni indie oyunları dener, seviye fikirleri çizer ve yapay zekânın daha \
             akıllı oynanış deneyimlerini nasıl destekleyebileceğini araştırırım.",
        ],
        contact_title: "İletişim",
        contact_info: &[
            ContactItem { label: "E-posta", value: EMAIL, href: Some("mailto:semih.bic.er@hotmail.com") },
            ContactItem { label: "Telefon", value: "+90 531 614 1027", href: Some("tel:+905316141027") },
            ContactItem { label: "GitHub", value: "Semi-Bicer", href: Some("https://github.com/Semi-Bicer") },
            ContactItem {
                label: "LinkedIn",
                value: "semih-bahadir-bicer",
                href: Some("https://www.linkedin.com/in/semih-bahadir-bicer"),
            },
            ContactItem { label: "Konum", value: "Denizli, Türkiye", href: None },
        ],
        education_title: "Eğitim",
        education: Education {
            period: "2024 - Devam",
            program: "Bilgisayar Mühendisliği",
            school: "Pamukkale Üniversitesi",
            focus: "Oyun geliştirme, uygulamalı yapay zekâ ve modern yazılım mühendisliği pratiklerine odaklanıyorum.",
        },
        languages_title: "Dil Yetkinliği",
        language_levels: &[
            LanguageLevel { name: "İngilizce", level: "B2", confidence: 4 },
            LanguageLevel { name: "Japonca", level: "JLPT N4", confidence: 2 },
        ],
        toolkit_title: "Teknik Araç Seti",
        technical_skills: &["Unity", "C#", "C++", "Python", "Makine Öğrenmesi", "Git & GitHub"],
    },
};
