use std::fmt::{self, Display};
use std::io::{self, Write};

use indoc::writedoc;
use symbols_source::SymbolClass;

/// заголовочный файл с объявлениями таблиц
pub const DECLARATIONS: &str = "symbols.h";

/// начало файла: лицензия, include и пространства имен
pub fn write_file_prolog<W: Write>(w: &mut W, year: u16, brief: &str) -> io::Result<()>
{
    writedoc!(
        w,
        r#"
        /** Copyright &copy; {year}, Vladimir Lapshin.
         *
         *   Licensed under the Apache License, Version 2.0 (the "License");
         *   you may not use this file except in compliance with the License.
         *   You may obtain a copy of the License at
         *
         *     http://www.apache.org/licenses/LICENSE-2.0
         *
         *   Unless required by applicable law or agreed to in writing, software
         *   distributed under the License is distributed on an "AS IS" BASIS,
         *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
         *   See the License for the specific language governing permissions and
         *   limitations under the License.
         *
         * \brief {brief}
         * \author Vladimir Lapshin.
         */

        #include "{include}"

        namespace strutext {{ namespace symbols {{ namespace details {{

        "#,
        year = year,
        brief = brief,
        include = DECLARATIONS,
    )
}

/// конец файла
pub fn write_file_epilog<W: Write>(w: &mut W) -> io::Result<()>
{
    writeln!(w, "}}}}}} // namespace strutext, symbols, details.")
}

pub fn write_table_prolog<W: Write>(w: &mut W, type_name: &str, name: &str) -> io::Result<()>
{
    writeln!(w, "{} {}[] = {{", type_name, name)
}

pub fn write_table_epilog<W: Write>(w: &mut W, type_name: &str, name: &str) -> io::Result<()>
{
    writeln!(w, "}}; // {} {}\n", type_name, name)
}

/// таблица по элементу в строке, запятая - в начале строки, начиная со второго элемента;
/// если у элемента есть название символа, оно пишется в комментарии
pub fn write_table<W, V, I>(
    w: &mut W,
    type_name: &str,
    name: &str,
    values: I,
    comments: &[Option<&str>],
) -> io::Result<()>
where
    W: Write,
    V: Display,
    I: IntoIterator<Item = V>,
{
    write_table_prolog(w, type_name, name)?;

    for (index, value) in values.into_iter().enumerate() {
        let separator = match index > 0 {
            true => ",",
            false => "",
        };

        match comments.get(index).copied().flatten() {
            Some(comment) => writeln!(w, "  {}{} // {}.", separator, value, comment)?,
            None => writeln!(w, "  {}{}", separator, value)?,
        }
    }

    write_table_epilog(w, type_name, name)
}

/// элемент таблицы классов
#[derive(Clone, Copy)]
pub struct ClassLiteral(pub SymbolClass);

impl Display for ClassLiteral
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "static_cast<uint32_t>({})", self.0.name())
    }
}

/// элемент таблицы прописных / строчных пар
#[derive(Clone, Copy)]
pub struct CodeLiteral(pub u32);

impl Display for CodeLiteral
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "0x{:04X}", self.0)
    }
}
