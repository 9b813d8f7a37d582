//! Featured project copy.

use super::Localized;

#[derive(Debug)]
pub struct Project {
    pub title: &'static str,
    pub summary_label: &'static str,
    pub summary: &'static str,
    pub details_label: &'static str,
    pub details: &'static str,
    pub skills: &'static [&'static str],
    pub link: Option<&'static str>,
}

#[derive(Debug)]
pub struct ProjectsCopy {
    pub heading: &'static str,
    pub intro: &'static str,
    pub view_repository: &'static str,
    pub projects: &'static [Project],
}

pub static PROJECTS: Localized<ProjectsCopy> = Localized {
    en: ProjectsCopy {
        heading: "Featured Projects",
        intro: "Each project is a playground for testing new ideas in gameplay feel, AI behavior, or engineering \
                workflow. Below are a few highlights demonstrating how I approach prototyping, iteration, and \
                player-focused design.",
        view_repository: "View repository ↗",
        projects: &[
            Project {
                title: "Unity 2D Platformer",
                summary_label: "Summary",
                summary: "A responsive platform experience focused on precision movement and moment-to-moment polish.",
                details_label: "What I delivered",
                details: "Implemented bespoke physics, player state machines, and modular level systems. Tuned \
                          feedback loops for pick-ups, combat, and traversal.",
                skills: &["Unity", "C#", "Game Design"],
                link: None,
            },
            Project {
                title: "Python Hack & Slash Prototype",
                summary_label: "Summary",
                summary: "A fast-paced arcade prototype built with Pygame to explore combat loops and enemy AI.",
                details_label: "What I delivered",
                details: "Optimized rendering pipelines, built configurable AI behaviors, and designed scalable \
                          content tools to tweak encounters rapidly.",
                skills: &["Python", "Pygame", "Optimization", "AI Systems"],
                link: None,
            },
            Project {
                title: "Health Insurance Prediction",
                summary_label: "Summary",
                summary: "Machine learning workflow predicting insurance costs using demographic health metrics.",
                details_label: "What I delivered",
                details: "Performed exploratory analysis, engineered features, and compared regression, decision \
                          tree, and random forest models to evaluate accuracy.",
                skills: &["Python", "Machine Learning", "Data Analysis"],
                link: None,
            },
        ],
    },
    tr: ProjectsCopy {
        heading: "Öne Çıkan Projeler",
        intro: "Her proje, oynanış hissi, yapay zekâ davranışları veya mühendislik süreçleri üzerine yeni fikirleri \
                denediğim bir oyun alanı. Aşağıda prototipleme, iterasyon ve oyuncu odaklı tasarıma nasıl \
                yaklaştığımı gösteren örnekleri bulabilirsiniz.",
        view_repository: "Depoyu görüntüle ↗",
        projects: &[
            Project {
                title: "Unity 2D Platform Oyunu",
                summary_label: "Özet",
                summary: "Keskin hareket ve anlık geri bildirimlere odaklanan duyarlı bir platformer deneyimi.",
                details_label: "Katkılarım",
                details: "Özel fizik sistemleri, oyuncu durum makineleri ve modüler seviye altyapıları geliştirdim. \
                          Toplanabilirler, dövüş ve keşif için geri bildirim döngülerini hassas şekilde ayarladım.",
                skills: &["Unity", "C#", "Oyun Tasarımı"],
                link: None,
            },
            Project {
                title: "Python Hack & Slash Prototipi",
                summary_label: "Özet",
                summary: "Pygame ile inşa edilmiş, dövüş döngülerini ve düşman yapay zekâsını keşfeden hızlı \
                          tempolu bir arcade prototip.",
                details_label: "Katkılarım",
                details: "Render süreçlerini optimize ettim, yapılandırılabilir AI davranışları oluşturdum ve \
                          karşılaşmaları hızla dengelemek için içerik araçları tasarladım.",
                skills: &["Python", "Pygame", "Optimizasyon", "AI Sistemleri"],
                link: None,
            },
            Project {
                title: "Sağlık Sigortası Tahmini",
                summary_label: "Özet",
                summary: "Demografik sağlık metriklerini kullanarak sigorta maliyetlerini tahmin eden bir makine \
                          öğrenmesi akışı.",
                details_label: "Katkılarım",
                details: "Keşifsel analizler yaptım, özellik mühendisliği uyguladım ve doğruluk için regresyon, karar \
                          ağacı ve rastgele orman modellerini kıyasladım.",
                skills: &["Python", "Makine Öğrenmesi", "Veri Analizi"],
                link: None,
            },
        ],
    },
};
