//! Synthetic contacts for demos and for trying pagination on a large directory.
//!
//! Records go through [`Record::new`] like any user input, so the phone formats below are
//! a sample of the ways people actually type Russian numbers.

use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::Result;
use crate::model::Record;
use rand::seq::SliceRandom;
use rand::Rng;

const SURNAMES: &[&str] = &[
    "Иванов", "Смирнов", "Кузнецов", "Попов", "Васильев", "Петров", "Соколов", "Михайлов",
    "Новиков", "Федоров", "Морозов", "Волков", "Алексеев", "Лебедев", "Семенов", "Егоров",
    "Павлов", "Козлов", "Степанов", "Николаев", "Орлов", "Андреев", "Макаров", "Никитин",
    "Захаров", "Зайцев", "Соловьев", "Борисов", "Яковлев", "Григорьев",
];

const MALE_NAMES: &[&str] = &[
    "Александр", "Алексей", "Андрей", "Артем", "Борис", "Вадим", "Виктор", "Владимир",
    "Георгий", "Дмитрий", "Евгений", "Иван", "Игорь", "Кирилл", "Максим", "Михаил", "Никита",
    "Олег", "Павел", "Роман", "Сергей", "Степан", "Юрий",
];

const FEMALE_NAMES: &[&str] = &[
    "Алла", "Анастасия", "Анна", "Валентина", "Вера", "Галина", "Дарья", "Екатерина", "Елена",
    "Ирина", "Ксения", "Лариса", "Людмила", "Марина", "Мария", "Наталья", "Ольга", "Полина",
    "Светлана", "Татьяна", "Юлия",
];

/// Patronymics as (male, female) pairs.
const PATRONYMICS: &[(&str, &str)] = &[
    ("Александрович", "Александровна"),
    ("Алексеевич", "Алексеевна"),
    ("Андреевич", "Андреевна"),
    ("Борисович", "Борисовна"),
    ("Викторович", "Викторовна"),
    ("Владимирович", "Владимировна"),
    ("Дмитриевич", "Дмитриевна"),
    ("Евгеньевич", "Евгеньевна"),
    ("Иванович", "Ивановна"),
    ("Игоревич", "Игоревна"),
    ("Михайлович", "Михайловна"),
    ("Николаевич", "Николаевна"),
    ("Олегович", "Олеговна"),
    ("Павлович", "Павловна"),
    ("Петрович", "Петровна"),
    ("Сергеевич", "Сергеевна"),
    ("Степанович", "Степановна"),
    ("Юрьевич", "Юрьевна"),
];

const ORG_FORMS: &[&str] = &["ООО", "АО", "ПАО", "ЗАО", "НПО", "ИП"];

const ORG_NAMES: &[&str] = &[
    "Ромашка", "Вектор", "Гарант", "Север", "Меридиан", "Альянс", "Техносфера", "Монолит",
    "Кристалл", "Восход", "Стройинвест", "Орион", "Радуга", "Полюс", "Импульс",
];

const PHONE_FORMATS: &[&str] = &[
    "+7 ### ### ## ##",
    "+7 (###) ###-##-##",
    "8 ### ### ## ##",
    "8 (###) ###-####",
    "8-###-###-##-##",
    "(###)###-##-##",
    "##########",
];

pub fn run<R: Rng + ?Sized>(
    directory: &mut Directory,
    count: usize,
    rng: &mut R,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for _ in 0..count {
        let record = fake_record(rng)?;
        let pk = directory.add(record);
        if let Some(stored) = directory.get(pk) {
            result.affected_records.push(stored.clone());
        }
    }
    result.add_message(CmdMessage::success(format!(
        "Added {} generated records.",
        count
    )));
    Ok(result)
}

pub fn fake_record<R: Rng + ?Sized>(rng: &mut R) -> Result<Record> {
    let female = rng.gen_bool(0.5);
    let surname = pick(SURNAMES, rng);
    let (male_patronymic, female_patronymic) = PATRONYMICS
        .choose(rng)
        .copied()
        .unwrap_or(("Иванович", "Ивановна"));

    let (surname, name, patronymic) = if female {
        (
            format!("{}а", surname),
            pick(FEMALE_NAMES, rng).to_string(),
            female_patronymic.to_string(),
        )
    } else {
        (
            surname.to_string(),
            pick(MALE_NAMES, rng).to_string(),
            male_patronymic.to_string(),
        )
    };

    let organization = format!("{} «{}»", pick(ORG_FORMS, rng), pick(ORG_NAMES, rng));
    let work_phone = fake_phone(rng);
    let cell_phone = fake_phone(rng);

    Ok(Record::new(
        &surname,
        &name,
        &patronymic,
        &organization,
        &work_phone,
        &cell_phone,
    )?)
}

/// Fills a random format with digits; the area code always starts with 9 or 4.
pub fn fake_phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    let format = pick(PHONE_FORMATS, rng);
    let mut first = true;
    format
        .chars()
        .map(|c| {
            if c != '#' {
                return c;
            }
            let digit = if first {
                first = false;
                *[b'9', b'4'].choose(rng).unwrap_or(&b'9')
            } else {
                b'0' + rng.gen_range(0..10u8)
            };
            digit as char
        })
        .collect()
}

fn pick<'a, R: Rng + ?Sized>(items: &[&'a str], rng: &mut R) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}
