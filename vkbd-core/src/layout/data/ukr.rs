use super::LayoutDef;

pub(crate) const UKR: LayoutDef = LayoutDef {
    code: "ukr",
    name: "Украина",
    locale: "uk",
    normal: &[
        "' 1 2 3 4 5 6 7 8 9 0 - = {bksp}",
        "\u{439} \u{446} \u{443} \u{43a} \u{435} \u{43d} \u{433} \u{448} \u{449} \u{437} \u{445} \u{457}",
        "{change} \u{444} \u{456} \u{432} \u{430} \u{43f} \u{440} \u{43e} \u{43b} \u{434} \u{436} \u{454} \u{491}",
        "{shift} \u{44f} \u{447} \u{441} \u{43c} \u{438} \u{442} \u{44c} \u{431} \u{44e} . {shift}",
        "{alt} &nbsp {alt}",
    ],
    shift: &[
        "\u{20b4} ! \" \u{2116} ; % : ? * ( ) _ + {bksp}",
        "\u{419} \u{426} \u{423} \u{41a} \u{415} \u{41d} \u{413} \u{428} \u{429} \u{417} \u{425} \u{407}",
        "{change} \u{424} \u{406} \u{412} \u{410} \u{41f} \u{420} \u{41e} \u{41b} \u{414} \u{416} \u{404} \u{490}",
        "{shift} \u{42f} \u{427} \u{421} \u{41c} \u{418} \u{422} \u{42c} \u{411} \u{42e} , {shift}",
        "{alt} &nbsp {alt}",
    ],
    alt: &[
        "{} {} {} {} {} {} {} {} {} {} {} {} {} {bksp}",
        "{} {} {} {} {} {} \\ {} {} {} {} {}",
        "{change} {} {} {} {} {} {} {} {} {} {} {} {}",
        "{shift} {} {} {} {} {} {} {} {} {} {} {shift}",
        "{alt} &nbsp {alt}",
    ],
    alt_shift: &[
        "{} {} {} {} {} {} {} {} {} {} {} {} {} {bksp}",
        "{} {} {} {} {} {} / {} {} {} {} {}",
        "{change} {} {} {} {} {} {} {} {} {} {} {} {}",
        "{shift} {} {} {} {} {} {} {} {} {} {} {shift}",
        "{alt} &nbsp {alt}",
    ],
    transforms: &[],
};
