use super::PropertiesError;

/// класс символа (symbol class), соответствует основной категории (General Category, GC)
/// берется из UCD: третья колонка UnicodeData.txt
///
/// всего 30 вариантов, каждый занимает отдельный бит маски классов библиотеки-потребителя,
/// поэтому проверка принадлежности к группе - это `&` с одной из масок ниже
///
/// группы:
///     CASED_LETTER (Lu, Ll, Lt)
///     LETTER (Lu, Ll, Lt, Lm, Lo)
///     MARK (Mn, Mc, Me)
///     NUMBER (Nd, Nl, No)
///     PUNCTUATION (Pc, Pd, Ps, Pe, Pi, Pf, Po)
///     SYMBOL (Sm, Sc, Sk, So)
///     SEPARATOR (Zs, Zl, Zp)
///     OTHER (Cc, Cf, Cs, Co, Cn)
///
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
#[repr(u32)]
pub enum SymbolClass
{
    /// Lu - прописная буква
    UppercaseLetter = 0x0000_0001,
    /// Ll - строчная буква
    LowercaseLetter = 0x0000_0002,
    /// Lt - диграфический символ, первая часть - заглавная буква
    TitlecaseLetter = 0x0000_0004,
    /// Lm - буква-модификатор
    ModifierLetter = 0x0000_0008,
    /// Lo - прочие буквы, включая слоги и иероглифы
    OtherLetter = 0x0000_0010,

    /// Mn - неразрывный комбинирующий маркер
    NonspacingMark = 0x0000_0020,
    /// Mc - комбинирующий маркер, занимающий пространство
    SpacingMark = 0x0000_0040,
    /// Me - охватывающий комбинирующий маркер
    EnclosingMark = 0x0000_0080,

    /// Nd - десятичная цифра
    DecimalNumber = 0x0000_0100,
    /// Nl - буквоподобный числовой символ
    LetterNumber = 0x0000_0200,
    /// No - прочие числовые символы
    OtherNumber = 0x0000_0400,

    /// Pc - объединяющая пунктуация, например _
    ConnectorPunctuation = 0x0000_0800,
    /// Pd - тире или дефис
    DashPunctuation = 0x0000_1000,
    /// Ps - открывающий знак пунктуации (из пары)
    OpenPunctuation = 0x0000_2000,
    /// Pe - закрывающий знак пунктуации (из пары)
    ClosePunctuation = 0x0000_4000,
    /// Pi - начальный знак цитаты
    InitialPunctuation = 0x0000_8000,
    /// Pf - конечный знак цитаты
    FinalPunctuation = 0x0001_0000,
    /// Po - знак препинания другого типа
    OtherPunctuation = 0x0002_0000,

    /// Sm - математический символ
    MathSymbol = 0x0004_0000,
    /// Sc - символ валюты
    CurrencySymbol = 0x0008_0000,
    /// Sk - символ модификатора, не похожий на букву
    ModifierSymbol = 0x0010_0000,
    /// So - прочие символы
    OtherSymbol = 0x0020_0000,

    /// Zs - разделитель-пробел
    SpaceSeparator = 0x0040_0000,
    /// Zl - разделитель строки
    LineSeparator = 0x0080_0000,
    /// Zp - разделитель параграфов
    ParagraphSeparator = 0x0100_0000,

    /// Cc - управляющий символ, относится к C0 или C1
    Control = 0x0200_0000,
    /// Cf - управляющий символ форматирования
    Format = 0x0400_0000,
    /// Cs - символ-суррогат
    Surrogate = 0x0800_0000,
    /// Co - символ для приватного использования
    PrivateUse = 0x1000_0000,
    /// Cn - место под символ зарезервировано или не назначено, или же элемент не является символом.
    /// дефолтный вариант при отсутствии записи о символе
    #[default]
    Unassigned = 0x2000_0000,
}

impl SymbolClass
{
    /// все классы, в порядке битов
    pub const ALL: [SymbolClass; 30] = [
        Self::UppercaseLetter,
        Self::LowercaseLetter,
        Self::TitlecaseLetter,
        Self::ModifierLetter,
        Self::OtherLetter,
        Self::NonspacingMark,
        Self::SpacingMark,
        Self::EnclosingMark,
        Self::DecimalNumber,
        Self::LetterNumber,
        Self::OtherNumber,
        Self::ConnectorPunctuation,
        Self::DashPunctuation,
        Self::OpenPunctuation,
        Self::ClosePunctuation,
        Self::InitialPunctuation,
        Self::FinalPunctuation,
        Self::OtherPunctuation,
        Self::MathSymbol,
        Self::CurrencySymbol,
        Self::ModifierSymbol,
        Self::OtherSymbol,
        Self::SpaceSeparator,
        Self::LineSeparator,
        Self::ParagraphSeparator,
        Self::Control,
        Self::Format,
        Self::Surrogate,
        Self::PrivateUse,
        Self::Unassigned,
    ];

    pub const CASED_LETTER: u32 = Self::UppercaseLetter.bits()
        | Self::LowercaseLetter.bits()
        | Self::TitlecaseLetter.bits();

    pub const LETTER: u32 =
        Self::CASED_LETTER | Self::ModifierLetter.bits() | Self::OtherLetter.bits();

    pub const MARK: u32 =
        Self::NonspacingMark.bits() | Self::SpacingMark.bits() | Self::EnclosingMark.bits();

    pub const NUMBER: u32 =
        Self::DecimalNumber.bits() | Self::LetterNumber.bits() | Self::OtherNumber.bits();

    pub const PUNCTUATION: u32 = Self::ConnectorPunctuation.bits()
        | Self::DashPunctuation.bits()
        | Self::OpenPunctuation.bits()
        | Self::ClosePunctuation.bits()
        | Self::InitialPunctuation.bits()
        | Self::FinalPunctuation.bits()
        | Self::OtherPunctuation.bits();

    pub const SYMBOL: u32 = Self::MathSymbol.bits()
        | Self::CurrencySymbol.bits()
        | Self::ModifierSymbol.bits()
        | Self::OtherSymbol.bits();

    pub const SEPARATOR: u32 = Self::SpaceSeparator.bits()
        | Self::LineSeparator.bits()
        | Self::ParagraphSeparator.bits();

    pub const OTHER: u32 = Self::Control.bits()
        | Self::Format.bits()
        | Self::Surrogate.bits()
        | Self::PrivateUse.bits()
        | Self::Unassigned.bits();

    /// бит класса в маске
    #[inline]
    pub const fn bits(self) -> u32
    {
        self as u32
    }

    /// двухбуквенное обозначение категории в UCD
    pub const fn abbr(self) -> &'static str
    {
        match self {
            Self::UppercaseLetter => "Lu",
            Self::LowercaseLetter => "Ll",
            Self::TitlecaseLetter => "Lt",
            Self::ModifierLetter => "Lm",
            Self::OtherLetter => "Lo",
            Self::NonspacingMark => "Mn",
            Self::SpacingMark => "Mc",
            Self::EnclosingMark => "Me",
            Self::DecimalNumber => "Nd",
            Self::LetterNumber => "Nl",
            Self::OtherNumber => "No",
            Self::ConnectorPunctuation => "Pc",
            Self::DashPunctuation => "Pd",
            Self::OpenPunctuation => "Ps",
            Self::ClosePunctuation => "Pe",
            Self::InitialPunctuation => "Pi",
            Self::FinalPunctuation => "Pf",
            Self::OtherPunctuation => "Po",
            Self::MathSymbol => "Sm",
            Self::CurrencySymbol => "Sc",
            Self::ModifierSymbol => "Sk",
            Self::OtherSymbol => "So",
            Self::SpaceSeparator => "Zs",
            Self::LineSeparator => "Zl",
            Self::ParagraphSeparator => "Zp",
            Self::Control => "Cc",
            Self::Format => "Cf",
            Self::Surrogate => "Cs",
            Self::PrivateUse => "Co",
            Self::Unassigned => "Cn",
        }
    }

    /// символьное имя класса, как оно объявлено в enum SymbolClass библиотеки-потребителя
    pub const fn name(self) -> &'static str
    {
        match self {
            Self::UppercaseLetter => "UPPERCASE_LETTER",
            Self::LowercaseLetter => "LOWERCASE_LETTER",
            Self::TitlecaseLetter => "TITLECASE_LETTER",
            Self::ModifierLetter => "MODIFIER_LETTER",
            Self::OtherLetter => "OTHER_LETTER",
            Self::NonspacingMark => "NONSPACING_MARK",
            Self::SpacingMark => "SPACING_MARK",
            Self::EnclosingMark => "ENCLOSING_MARK",
            Self::DecimalNumber => "DECIMAL_NUMBER",
            Self::LetterNumber => "LETTER_NUMBER",
            Self::OtherNumber => "OTHER_NUMBER",
            Self::ConnectorPunctuation => "CONNECTOR_PUNCTUATION",
            Self::DashPunctuation => "DASH_PUNCTUATION",
            Self::OpenPunctuation => "OPEN_PUNCTUATION",
            Self::ClosePunctuation => "CLOSE_PUNCTUATION",
            Self::InitialPunctuation => "INITIAL_PUNCTUATION",
            Self::FinalPunctuation => "FINAL_PUNCTUATION",
            Self::OtherPunctuation => "OTHER_PUNCTUATION",
            Self::MathSymbol => "MATH_SYMBOL",
            Self::CurrencySymbol => "CURRENCY_SYMBOL",
            Self::ModifierSymbol => "MODIFIER_SYMBOL",
            Self::OtherSymbol => "OTHER_SYMBOL",
            Self::SpaceSeparator => "SPACE_SEPARATOR",
            Self::LineSeparator => "LINE_SEPARATOR",
            Self::ParagraphSeparator => "PARAGRAPH_SEPARATOR",
            Self::Control => "CONTROL",
            Self::Format => "FORMAT",
            Self::Surrogate => "SURROGATE",
            Self::PrivateUse => "PRIVATE_USE",
            Self::Unassigned => "UNASSIGNED",
        }
    }

    /// относится-ли класс к группе, заданной маской
    #[inline]
    pub const fn is(self, mask: u32) -> bool
    {
        self.bits() & mask != 0
    }

    /// буква с регистром (LC)
    #[inline]
    pub const fn is_cased_letter(self) -> bool
    {
        self.is(Self::CASED_LETTER)
    }

    /// буква (L)
    #[inline]
    pub const fn is_letter(self) -> bool
    {
        self.is(Self::LETTER)
    }

    /// комбинирующий символ (M)
    #[inline]
    pub const fn is_mark(self) -> bool
    {
        self.is(Self::MARK)
    }

    /// цифры и числовые символы (N)
    #[inline]
    pub const fn is_number(self) -> bool
    {
        self.is(Self::NUMBER)
    }

    /// пунктуация (P)
    #[inline]
    pub const fn is_punctuation(self) -> bool
    {
        self.is(Self::PUNCTUATION)
    }

    /// символы (S)
    #[inline]
    pub const fn is_symbol(self) -> bool
    {
        self.is(Self::SYMBOL)
    }

    /// разделители (Z)
    #[inline]
    pub const fn is_separator(self) -> bool
    {
        self.is(Self::SEPARATOR)
    }

    /// управляющие, служебные и неназначенные (C)
    #[inline]
    pub const fn is_other(self) -> bool
    {
        self.is(Self::OTHER)
    }

    /// категория не назначена (Cn)
    #[inline]
    pub const fn is_unassigned(self) -> bool
    {
        matches!(self, Self::Unassigned)
    }
}

impl From<SymbolClass> for u32
{
    #[inline]
    fn from(value: SymbolClass) -> Self
    {
        value.bits()
    }
}

impl TryFrom<&str> for SymbolClass
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        Ok(match abbr {
            "Lu" => Self::UppercaseLetter,
            "Ll" => Self::LowercaseLetter,
            "Lt" => Self::TitlecaseLetter,
            "Lm" => Self::ModifierLetter,
            "Lo" => Self::OtherLetter,
            "Mn" => Self::NonspacingMark,
            "Mc" => Self::SpacingMark,
            "Me" => Self::EnclosingMark,
            "Nd" => Self::DecimalNumber,
            "Nl" => Self::LetterNumber,
            "No" => Self::OtherNumber,
            "Pc" => Self::ConnectorPunctuation,
            "Pd" => Self::DashPunctuation,
            "Ps" => Self::OpenPunctuation,
            "Pe" => Self::ClosePunctuation,
            "Pi" => Self::InitialPunctuation,
            "Pf" => Self::FinalPunctuation,
            "Po" => Self::OtherPunctuation,
            "Sm" => Self::MathSymbol,
            "Sc" => Self::CurrencySymbol,
            "Sk" => Self::ModifierSymbol,
            "So" => Self::OtherSymbol,
            "Zs" => Self::SpaceSeparator,
            "Zl" => Self::LineSeparator,
            "Zp" => Self::ParagraphSeparator,
            "Cc" => Self::Control,
            "Cf" => Self::Format,
            "Cs" => Self::Surrogate,
            "Co" => Self::PrivateUse,
            "Cn" => Self::Unassigned,
            _ => return Err(PropertiesError::UnknownCategory(abbr.to_owned())),
        })
    }
}
