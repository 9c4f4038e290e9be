// Small hand-made corpus used across unit tests.
//
// Chapter 1 (7 verses, section 1, page 1), the first five verses of chapter 2
// (section 1, page 2) and chapter 114 (section 30, page 604).

use super::entity::{AudioResourceId, Verse};

struct ChapterNames {
    number: u16,
    local: &'static str,
    translated: &'static str,
    original: &'static str,
}

const AL_FATIHAH: ChapterNames = ChapterNames {
    number: 1,
    local: "Al-Fatihah",
    translated: "Pembukaan",
    original: "الفاتحة",
};

const AL_BAQARAH: ChapterNames = ChapterNames {
    number: 2,
    local: "Al-Baqarah",
    translated: "Sapi Betina",
    original: "البقرة",
};

const AN_NAS: ChapterNames = ChapterNames {
    number: 114,
    local: "An-Nas",
    translated: "Manusia",
    original: "الناس",
};

#[allow(clippy::too_many_arguments)]
fn verse(
    global_index: u32,
    chapter: &ChapterNames,
    verse_number: u16,
    section_number: u16,
    page_number: u16,
    original_text: &str,
    translation_primary: &str,
    translation_secondary: Option<&str>,
) -> Verse {
    Verse {
        global_index,
        chapter_number: chapter.number,
        chapter_name_local: chapter.local.to_string(),
        chapter_name_translated: chapter.translated.to_string(),
        chapter_name_original: chapter.original.to_string(),
        section_number,
        page_number,
        verse_number,
        original_text: original_text.to_string(),
        translation_primary: translation_primary.to_string(),
        translation_secondary: translation_secondary.map(str::to_string),
        audio_resource_id: AudioResourceId::for_verse(chapter.number, verse_number),
    }
}

pub fn sample_verses() -> Vec<Verse> {
    vec![
        verse(1, &AL_FATIHAH, 1, 1, 1,
            "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ",
            "Dengan nama Allah Yang Maha Pengasih, Maha Penyayang.",
            Some("In the name of Allah, the Entirely Merciful, the Especially Merciful.")),
        verse(2, &AL_FATIHAH, 2, 1, 1,
            "الْحَمْدُ لِلَّهِ رَبِّ الْعَالَمِينَ",
            "Segala puji bagi Allah, Tuhan seluruh alam,",
            Some("All praise is due to Allah, Lord of the worlds.")),
        verse(3, &AL_FATIHAH, 3, 1, 1,
            "الرَّحْمَٰنِ الرَّحِيمِ",
            "Yang Maha Pengasih, Maha Penyayang,",
            Some("The Entirely Merciful, the Especially Merciful,")),
        verse(4, &AL_FATIHAH, 4, 1, 1,
            "مَالِكِ يَوْمِ الدِّينِ",
            "Pemilik hari pembalasan.",
            Some("Sovereign of the Day of Recompense.")),
        verse(5, &AL_FATIHAH, 5, 1, 1,
            "إِيَّاكَ نَعْبُدُ وَإِيَّاكَ نَسْتَعِينُ",
            "Hanya kepada Engkaulah kami menyembah dan hanya kepada Engkaulah kami mohon pertolongan.",
            Some("It is You we worship and You we ask for help.")),
        verse(6, &AL_FATIHAH, 6, 1, 1,
            "اهْدِنَا الصِّرَاطَ الْمُسْتَقِيمَ",
            "Tunjukilah kami jalan yang lurus,",
            Some("Guide us to the straight path.")),
        verse(7, &AL_FATIHAH, 7, 1, 1,
            "صِرَاطَ الَّذِينَ أَنْعَمْتَ عَلَيْهِمْ غَيْرِ الْمَغْضُوبِ عَلَيْهِمْ وَلَا الضَّالِّينَ",
            "(yaitu) jalan orang-orang yang telah Engkau beri nikmat kepadanya; bukan (jalan) mereka yang dimurkai, dan bukan (pula jalan) mereka yang sesat.",
            Some("The path of those upon whom You have bestowed favor, not of those who have evoked anger or of those who are astray.")),
        verse(8, &AL_BAQARAH, 1, 1, 2,
            "الم",
            "Alif Lam Mim.",
            None),
        verse(9, &AL_BAQARAH, 2, 1, 2,
            "ذَٰلِكَ الْكِتَابُ لَا رَيْبَ ۛ فِيهِ ۛ هُدًى لِلْمُتَّقِينَ",
            "Kitab (Al-Qur'an) ini tidak ada keraguan padanya; petunjuk bagi mereka yang bertakwa,",
            Some("This is the Book about which there is no doubt, a guidance for those conscious of Allah.")),
        verse(10, &AL_BAQARAH, 3, 1, 2,
            "الَّذِينَ يُؤْمِنُونَ بِالْغَيْبِ وَيُقِيمُونَ الصَّلَاةَ وَمِمَّا رَزَقْنَاهُمْ يُنْفِقُونَ",
            "(yaitu) mereka yang beriman kepada yang gaib, melaksanakan salat, dan menginfakkan sebagian rezeki yang Kami berikan kepada mereka,",
            Some("Who believe in the unseen, establish prayer, and spend out of what We have provided for them,")),
        verse(11, &AL_BAQARAH, 4, 1, 2,
            "وَالَّذِينَ يُؤْمِنُونَ بِمَا أُنْزِلَ إِلَيْكَ وَمَا أُنْزِلَ مِنْ قَبْلِكَ وَبِالْآخِرَةِ هُمْ يُوقِنُونَ",
            "dan mereka yang beriman kepada (Al-Qur'an) yang diturunkan kepadamu (Muhammad) dan (kitab-kitab) yang telah diturunkan sebelum engkau, dan mereka yakin akan adanya akhirat.",
            Some("And who believe in what has been revealed to you, and what was revealed before you, and of the Hereafter they are certain.")),
        verse(12, &AL_BAQARAH, 5, 1, 2,
            "أُولَٰئِكَ عَلَىٰ هُدًى مِنْ رَبِّهِمْ ۖ وَأُولَٰئِكَ هُمُ الْمُفْلِحُونَ",
            "Merekalah yang mendapat petunjuk dari Tuhannya, dan mereka itulah orang-orang yang beruntung.",
            Some("Those are upon guidance from their Lord, and it is those who are the successful.")),
        verse(6231, &AN_NAS, 1, 30, 604,
            "قُلْ أَعُوذُ بِرَبِّ النَّاسِ",
            "Katakanlah, \"Aku berlindung kepada Tuhannya manusia,",
            Some("Say, \"I seek refuge in the Lord of mankind,")),
        verse(6232, &AN_NAS, 2, 30, 604,
            "مَلِكِ النَّاسِ",
            "Raja manusia,",
            Some("The Sovereign of mankind.")),
        verse(6233, &AN_NAS, 3, 30, 604,
            "إِلَٰهِ النَّاسِ",
            "sembahan manusia,",
            Some("The God of mankind,")),
        verse(6234, &AN_NAS, 4, 30, 604,
            "مِنْ شَرِّ الْوَسْوَاسِ الْخَنَّاسِ",
            "dari kejahatan (bisikan) setan yang bersembunyi,",
            Some("From the evil of the retreating whisperer")),
        verse(6235, &AN_NAS, 5, 30, 604,
            "الَّذِي يُوَسْوِسُ فِي صُدُورِ النَّاسِ",
            "yang membisikkan (kejahatan) ke dalam dada manusia,",
            Some("Who whispers evil into the breasts of mankind")),
        verse(6236, &AN_NAS, 6, 30, 604,
            "مِنَ الْجِنَّةِ وَالنَّاسِ",
            "dari (golongan) jin dan manusia.\"",
            Some("From among the jinn and mankind.\"")),
    ]
}
