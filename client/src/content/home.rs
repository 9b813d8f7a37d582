//! Landing page copy.

use super::{Localized, Section};

#[derive(Debug)]
pub struct HighlightCard {
    pub title: &'static str,
    pub description: &'static str,
    pub action: &'static str,
    pub target: Section,
}

#[derive(Debug)]
pub struct SkillPillar {
    pub title: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Debug)]
pub struct HomeCopy {
    pub hero_title: &'static str,
    pub hero_body: &'static str,
    pub hero_badges: &'static [&'static str],
    pub hero_primary: &'static str,
    pub hero_secondary: &'static str,
    pub highlight_cards: &'static [HighlightCard],
    pub expectation_title: &'static str,
    pub expectation_body: &'static str,
    pub skill_pillars: &'static [SkillPillar],
}

pub static HOME: Localized<HomeCopy> = Localized {
    en: HomeCopy {
        hero_title: "Hi, I'm Semih – Game Developer & Computer Engineer",
        hero_body: "I design and build interactive worlds that feel responsive, rewarding, and technically sound. \
                    My toolkit blends gameplay programming with AI-driven experimentation, helping me move quickly \
                    from idea to polished prototype.",
        hero_badges: &["Unity & C#", "Python & ML", "Systems Thinking"],
        hero_primary: "See featured projects",
        hero_secondary: "Discover my story",
        highlight_cards: &[
            HighlightCard {
                title: "About",
                description: "Education journey, strengths, and what drives my engineering mindset.",
                action: "See my story",
                target: Section::About,
            },
            HighlightCard {
                title: "Projects",
                description: "Unity prototypes, Python tooling, and machine-learning experiments.",
                action: "Explore builds",
                target: Section::Projects,
            },
            HighlightCard {
                title: "Experience",
                description: "Hands-on roles where I built gameplay systems and AI features.",
                action: "Review timeline",
                target: Section::Experience,
            },
        ],
        expectation_title: "What you can expect from me",
        expectation_body: "Whether it's shipping a feature in Unity or building prototypes for machine-learning ideas, \
                           I combine a disciplined engineering process with a love for game feel. I thrive in \
                           collaborative, player-focused teams.",
        skill_pillars: &[
            SkillPillar { title: "Gameplay Engineering", details: &["Unity/C#", "Physics systems", "Input & UX polish"] },
            SkillPillar {
                title: "Technical Foundations",
                details: &["C++ fundamentals", "Data structures", "Design patterns"],
            },
            SkillPillar {
                title: "AI & ML Curiosity",
                details: &["Python tooling", "Model experimentation", "Data visualization"],
            },
        ],
    },
    tr: HomeCopy {
        hero_title: "Merhaba, ben Semih – Oyun Geliştiricisi ve Bilgisayar Mühendisi",
        hero_body: "Etkileşimli dünyaları duyarlı, ödüllendirici ve teknik açıdan sağlam olacak şekilde tasarlayıp \
                    geliştiriyorum. Oyun programlama ve yapay zekâ denemelerini harmanlayan yaklaşımım, fikirleri \
                    hızla parlatılmış prototiplere dönüştürmemi sağlıyor.",
        hero_badges: &["Unity & C#", "Python & ML", "Sistemsel Yaklaşım"],
        hero_primary: "Öne çıkan projeleri gör",
        hero_secondary: "Hikayemi keşfet",
        highlight_cards: &[
            HighlightCard {
                title: "Hakkımda",
                description: "Eğitim yolculuğum, güçlü yönlerim ve mühendislik yaklaşımımı şekillendiren motivasyonlar.",
                action: "Hikayemi incele",
                target: Section::About,
            },
            HighlightCard {
                title: "Projeler",
                description: "Unity prototipleri, Python araçları ve makine öğrenmesi deneylerim.",
                action: "Çalışmaları keşfet",
                target: Section::Projects,
            },
            HighlightCard {
                title: "Deneyim",
                description: "Oynanış sistemleri ve yapay zekâ özellikleri geliştirdiğim gerçek projeler.",
                action: "Zaman çizelgesine bak",
                target: Section::Experience,
            },
        ],
        expectation_title: "Benden neler bekleyebilirsiniz",
        expectation_body: "İster Unity’de yeni bir özellik geliştireyim ister makine öğrenmesi fikirlerini \
                           prototipleştireyim; disiplinli mühendislik süreçlerini oyun hissine verdiğim önemle \
                           birleştiriyorum. Takım oyununa ve oyuncu odağına dayalı ortamlarda parlıyorum.",
        skill_pillars: &[
            SkillPillar {
                title: "Oynanış Mühendisliği",
                details: &["Unity/C#", "Fizik sistemleri", "Girdi ve kullanıcı deneyimi cilası"],
            },
            SkillPillar { title: "Teknik Temeller", details: &["C++ temelleri", "Veri yapıları", "Tasarım kalıpları"] },
            SkillPillar {
                title: "Yapay Zekâ Merakı",
                details: &["Python araçları", "Model denemeleri", "Veri görselleştirme"],
            },
        ],
    },
};
