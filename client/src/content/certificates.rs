//! Certificates and learning copy.

use super::Localized;
use crate::state::preferences::LanguageCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CertificateStatus {
    Completed,
    InProgress,
}

impl CertificateStatus {
    #[must_use]
    pub const fn label(self, language: LanguageCode) -> &'static str {
        match (self, language) {
            (Self::Completed, LanguageCode::En) => "Completed",
            (Self::Completed, LanguageCode::Tr) => "Tamamlandı",
            (Self::InProgress, LanguageCode::En) => "In Progress",
            (Self::InProgress, LanguageCode::Tr) => "Devam Ediyor",
        }
    }
}

#[derive(Debug)]
pub struct Certificate {
    pub title: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
    pub summary: &'static str,
    pub status: Option<CertificateStatus>,
    pub credential_url: Option<&'static str>,
}

#[derive(Debug)]
pub struct CertificatesCopy {
    pub heading: &'static str,
    pub intro: &'static str,
    pub view_credential: &'static str,
    pub callout_title: &'static str,
    pub callout_body: &'static str,
    pub certificates: &'static [Certificate],
}

const ML_CRASH_COURSE_URL: &str = "https://drive.google.com/file/d/1RzsgpJd7FF-obuXaj3OCcsk2awfb-gK0/view?usp=sharing";

pub static CERTIFICATES: Localized<CertificatesCopy> = Localized {
    en: CertificatesCopy {
        heading: "Certificates & Learning",
        intro: "I stay curious by consistently investing in structured learning. These programs sharpen my technical \
                instincts and expose me to new ideas that flow straight into my gameplay and AI work.",
        view_credential: "View credential ↗",
        callout_title: "Keep Learning",
        callout_body: "Have a new certificate or workshop? Duplicate one of the cards above and drop the details in. \
                       The layout will adapt automatically.",
        certificates: &[
            Certificate {
                title: "Unity Essentials Pathway",
                issuer: "Unity Learn",
                year: "2024",
                summary: "Structured deep dive through Unity workflows, covering scene management, scripting \
                          patterns, and optimization fundamentals.",
                status: Some(CertificateStatus::Completed),
                credential_url: None,
            },
            Certificate {
                title: "Machine Learning Crash Course",
                issuer: "Google Developers",
                year: "2023",
                summary: "Hands-on practice with supervised learning, model evaluation, and practical ML tooling \
                          using TensorFlow and Python.",
                status: Some(CertificateStatus::Completed),
                credential_url: Some(ML_CRASH_COURSE_URL),
            },
            Certificate {
                title: "Game Design Foundations",
                issuer: "GameDev.tv",
                year: "2022",
                summary: "Exploring player psychology, core loop design, and balancing techniques to reinforce \
                          engineering decisions with design insights.",
                status: Some(CertificateStatus::InProgress),
                credential_url: None,
            },
        ],
    },
    tr: CertificatesCopy {
        heading: "Sertifikalar ve Öğrenme",
        intro: "Sürekli olarak yapılandırılmış eğitimlere yatırım yaparak merakımı canlı tutuyorum. Bu programlar \
                teknik sezgilerimi keskinleştiriyor ve oynanış ile yapay zekâ çalışmalarımı besleyen yeni fikirler \
                sunuyor.",
        view_credential: "Sertifikayı görüntüle ↗",
        callout_title: "Öğrenmeye Devam",
        callout_body: "Yeni bir sertifikanız veya atölye çalışmanız mı var? Yukarıdaki kartlardan birini kopyalayıp \
                       bilgileri eklemeniz yeterli; yerleşim otomatik olarak uyum sağlar.",
        certificates: &[
            Certificate {
                title: "Unity Essentials Pathway",
                issuer: "Unity Learn",
                year: "2024",
                summary: "Unity iş akışlarını derinlemesine inceleyen, sahne yönetimi, betik kalıpları ve \
                          optimizasyon temellerini kapsayan yapılandırılmış bir eğitim.",
                status: Some(CertificateStatus::Completed),
                credential_url: None,
            },
            Certificate {
                title: "Machine Learning Crash Course",
                issuer: "Google Developers",
                year: "2023",
                summary: "Denetimli öğrenme, model değerlendirme ve TensorFlow ile Python tabanlı ML araçlarına \
                          yönelik uygulamalı çalışmalar.",
                status: Some(CertificateStatus::Completed),
                credential_url: Some(ML_CRASH_COURSE_URL),
            },
            Certificate {
                title: "Game Design Foundations",
                issuer: "GameDev.tv",
                year: "2022",
                summary: "Mühendislik kararlarını desteklemek için oyuncu psikolojisi, temel döngü tasarımı ve \
                          dengeleme tekniklerini inceliyorum.",
                status: Some(CertificateStatus::InProgress),
                credential_url: None,
            },
        ],
    },
};
