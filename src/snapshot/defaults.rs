//! Built-in content used before the first seed or snapshot write.

use uuid::Uuid;

use crate::domain::{
    DayOfWeek, PageSection, SectionContent, SectionStat, ServiceHours, SiteSettings,
};

/// Doctor seed data; ids are assigned at insertion time
#[derive(Debug, Clone)]
pub struct DoctorSeed {
    pub name: &'static str,
    pub specialty: &'static str,
    pub phone: &'static str,
    pub bio: &'static str,
}

/// Schedule seed data, linked to its doctor by name
#[derive(Debug, Clone)]
pub struct ScheduleSeed {
    pub doctor_name: &'static str,
    pub day_of_week: DayOfWeek,
    pub start_time: &'static str,
    pub end_time: &'static str,
    pub poli: &'static str,
}

pub fn default_doctors() -> Vec<DoctorSeed> {
    vec![
        DoctorSeed {
            name: "Dr. Ahmad Santoso, Sp.PD",
            specialty: "Penyakit Dalam",
            phone: "081234567890",
            bio: "Dokter spesialis penyakit dalam dengan pengalaman 15 tahun",
        },
        DoctorSeed {
            name: "Dr. Maya Kartika, Sp.A",
            specialty: "Anak",
            phone: "081234567891",
            bio: "Dokter spesialis anak berpengalaman dalam perawatan kesehatan anak",
        },
        DoctorSeed {
            name: "Dr. Budi Pratama, Sp.B",
            specialty: "Bedah",
            phone: "081234567892",
            bio: "Dokter spesialis bedah umum dengan sertifikasi internasional",
        },
        DoctorSeed {
            name: "Dr. Siti Rahayu, Sp.OG",
            specialty: "Kandungan",
            phone: "081234567893",
            bio: "Dokter spesialis kandungan dan kebidanan",
        },
    ]
}

pub fn default_schedules() -> Vec<ScheduleSeed> {
    vec![
        ScheduleSeed {
            doctor_name: "Dr. Ahmad Santoso, Sp.PD",
            day_of_week: DayOfWeek::Senin,
            start_time: "08:00",
            end_time: "12:00",
            poli: "Penyakit Dalam",
        },
        ScheduleSeed {
            doctor_name: "Dr. Ahmad Santoso, Sp.PD",
            day_of_week: DayOfWeek::Rabu,
            start_time: "14:00",
            end_time: "17:00",
            poli: "Penyakit Dalam",
        },
        ScheduleSeed {
            doctor_name: "Dr. Maya Kartika, Sp.A",
            day_of_week: DayOfWeek::Selasa,
            start_time: "09:00",
            end_time: "13:00",
            poli: "Anak",
        },
        ScheduleSeed {
            doctor_name: "Dr. Maya Kartika, Sp.A",
            day_of_week: DayOfWeek::Kamis,
            start_time: "08:00",
            end_time: "12:00",
            poli: "Anak",
        },
        ScheduleSeed {
            doctor_name: "Dr. Budi Pratama, Sp.B",
            day_of_week: DayOfWeek::Senin,
            start_time: "10:00",
            end_time: "14:00",
            poli: "Bedah",
        },
        ScheduleSeed {
            doctor_name: "Dr. Siti Rahayu, Sp.OG",
            day_of_week: DayOfWeek::Jumat,
            start_time: "08:00",
            end_time: "12:00",
            poli: "Kandungan",
        },
    ]
}

pub fn default_settings() -> SiteSettings {
    SiteSettings {
        hospital_name: "RS Sehat Selalu".into(),
        tagline: "Layanan Kesehatan Terpercaya".into(),
        email: "info@rssehatselalu.com".into(),
        phone: "(021) 1234-5678".into(),
        facebook_url: "https://facebook.com/rssehatselalu".into(),
        twitter_url: "https://twitter.com/rssehatselalu".into(),
        instagram_url: "https://instagram.com/rssehatselalu".into(),
        youtube_url: "https://youtube.com/rssehatselalu".into(),
    }
}

pub fn default_sections() -> Vec<PageSection> {
    vec![
        PageSection {
            id: Uuid::new_v4(),
            title: "Hero Section".into(),
            content: SectionContent::Hero {
                headline: "Selamat Datang di RS Sehat Selalu".into(),
                subheadline: "Layanan kesehatan terpercaya untuk Anda dan keluarga".into(),
                cta_text: "Buat Janji Temu".into(),
            },
            is_active: true,
            display_order: 1,
        },
        PageSection {
            id: Uuid::new_v4(),
            title: "Profil Rumah Sakit".into(),
            content: SectionContent::Profile {
                name: "RS Sehat Selalu".into(),
                description: "RS Sehat Selalu adalah rumah sakit modern yang berdedikasi \
                              untuk memberikan layanan kesehatan terbaik bagi masyarakat. \
                              Dengan peralatan medis terkini dan tim tenaga kesehatan \
                              profesional, kami siap melayani Anda dengan sepenuh hati."
                    .into(),
                established_year: "2010".into(),
                stats: vec![
                    SectionStat {
                        label: "Tahun Pengalaman".into(),
                        value: "15+".into(),
                    },
                    SectionStat {
                        label: "Dokter Spesialis".into(),
                        value: "50+".into(),
                    },
                    SectionStat {
                        label: "Pasien Dilayani".into(),
                        value: "10K+".into(),
                    },
                    SectionStat {
                        label: "Layanan IGD".into(),
                        value: "24/7".into(),
                    },
                ],
            },
            is_active: true,
            display_order: 2,
        },
        PageSection {
            id: Uuid::new_v4(),
            title: "Informasi Kontak".into(),
            content: SectionContent::Contact {
                address: "Jl. Kesehatan No. 123, Jakarta Selatan, 12345".into(),
                phone: "(021) 1234-5678".into(),
                email: "info@rssehatselalu.com".into(),
                igd_phone: "(021) 1234-5678".into(),
                general_phone: "(021) 1234-5679".into(),
                hours: ServiceHours {
                    igd: "24 Jam".into(),
                    poli: "08:00 - 20:00".into(),
                    weekend: "08:00 - 14:00".into(),
                },
            },
            is_active: true,
            display_order: 3,
        },
    ]
}
