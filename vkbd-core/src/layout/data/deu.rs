use super::LayoutDef;

pub(crate) const DEU: LayoutDef = LayoutDef {
    code: "deu",
    name: "Deutsch",
    locale: "de",
    normal: &[
        "^ 1 2 3 4 5 6 7 8 9 0 \u{df} \u{b4} {bksp}",
        "q w e r t z u i o p \u{fc} +",
        "{change} a s d f g h j k l \u{f6} \u{e4} #",
        "{shift} y x c v b n m , . - {shift}",
        "{alt} &nbsp {alt}",
    ],
    shift: &[
        "\u{b0} ! \" \u{a7} $ % &amp; / ( ) = ? ` {bksp}",
        "Q W E R T Z U I O P \u{dc} *",
        "{change} A S D F G H J K L \u{d6} \u{c4} '",
        "{shift} Y X C V B N M ; : _ {shift}",
        "{alt} &nbsp {alt}",
    ],
    alt: &[
        "{} &lt; \u{b2} \u{b3} {} {} {} { [ ] } \\ {} {bksp}",
        "@ {} \u{20ac} {} {} {} {} {} {} {} {} ~",
        "{change} {} {} {} {} {} {} {} {} {} {} {} {}",
        "{shift} | {} {} {} {} {} \u{b5} {} {} {} {shift}",
        "{alt} &nbsp {alt}",
    ],
    alt_shift: &[
        "{} &gt; \u{b2} \u{b3} {} {} {} { [ ] } \\ {} {bksp}",
        "@ {} \u{20ac} {} {} {} {} {} {} {} {} ~",
        "{change} {} {} {} {} {} {} {} {} {} {} {} {}",
        "{shift} | {} {} {} {} {} \u{b5} {} {} {} {shift}",
        "{alt} &nbsp {alt}",
    ],
    transforms: &[
        ("` ", "`"),
        ("`A", "\u{c0}"),
        ("`E", "\u{c8}"),
        ("`I", "\u{cc}"),
        ("`N", "\u{1f8}"),
        ("`O", "\u{d2}"),
        ("`U", "\u{d9}"),
        ("`W", "\u{1e80}"),
        ("`Y", "\u{1ef2}"),
        ("`a", "\u{e0}"),
        ("`e", "\u{e8}"),
        ("`i", "\u{ec}"),
        ("`n", "\u{1f9}"),
        ("`o", "\u{f2}"),
        ("`u", "\u{f9}"),
        ("`w", "\u{1e81}"),
        ("`y", "\u{1ef3}"),
        ("`\u{dc}", "\u{1db}"),
        ("`\u{fc}", "\u{1dc}"),
        ("\u{b4} ", "\u{b4}"),
        ("\u{b4}A", "\u{c1}"),
        ("\u{b4}C", "\u{106}"),
        ("\u{b4}E", "\u{c9}"),
        ("\u{b4}G", "\u{1f4}"),
        ("\u{b4}I", "\u{cd}"),
        ("\u{b4}K", "\u{1e30}"),
        ("\u{b4}L", "\u{139}"),
        ("\u{b4}M", "\u{1e3e}"),
        ("\u{b4}N", "\u{143}"),
        ("\u{b4}O", "\u{d3}"),
        ("\u{b4}P", "\u{1e54}"),
        ("\u{b4}R", "\u{154}"),
        ("\u{b4}S", "\u{15a}"),
        ("\u{b4}U", "\u{da}"),
        ("\u{b4}W", "\u{1e82}"),
        ("\u{b4}Y", "\u{dd}"),
        ("\u{b4}Z", "\u{179}"),
        ("\u{b4}a", "\u{e1}"),
        ("\u{b4}c", "\u{107}"),
        ("\u{b4}e", "\u{e9}"),
        ("\u{b4}g", "\u{1f5}"),
        ("\u{b4}i", "\u{ed}"),
        ("\u{b4}k", "\u{1e31}"),
        ("\u{b4}l", "\u{13a}"),
        ("\u{b4}m", "\u{1e3f}"),
        ("\u{b4}n", "\u{144}"),
        ("\u{b4}o", "\u{f3}"),
        ("\u{b4}p", "\u{1e55}"),
        ("\u{b4}r", "\u{155}"),
        ("\u{b4}s", "\u{15b}"),
        ("\u{b4}u", "\u{fa}"),
        ("\u{b4}w", "\u{1e83}"),
        ("\u{b4}y", "\u{fd}"),
        ("\u{b4}z", "\u{17a}"),
        ("\u{b4}\u{dc}", "\u{1d7}"),
        ("\u{b4}\u{fc}", "\u{1d8}"),
        ("^ ", "^"),
        ("^A", "\u{c2}"),
        ("^C", "\u{108}"),
        ("^E", "\u{ca}"),
        ("^G", "\u{11c}"),
        ("^H", "\u{124}"),
        ("^I", "\u{ce}"),
        ("^J", "\u{134}"),
        ("^O", "\u{d4}"),
        ("^S", "\u{15c}"),
        ("^U", "\u{db}"),
        ("^W", "\u{174}"),
        ("^Y", "\u{176}"),
        ("^Z", "\u{1e90}"),
        ("^a", "\u{e2}"),
        ("^c", "\u{109}"),
        ("^e", "\u{ea}"),
        ("^g", "\u{11d}"),
        ("^h", "\u{125}"),
        ("^i", "\u{ee}"),
        ("^j", "\u{135}"),
        ("^o", "\u{f4}"),
        ("^s", "\u{15d}"),
        ("^u", "\u{fb}"),
        ("^w", "\u{175}"),
        ("^y", "\u{177}"),
        ("^z", "\u{1e91}"),
    ],
};
